// Quick diagnostic: fire the configured Jenkins trigger once, outside Slack
// Run: cargo run --bin trigger_check

#[allow(dead_code)]
#[path = "../src/config.rs"]
mod config;
#[path = "../src/error.rs"]
mod error;
#[path = "../src/jenkins.rs"]
mod jenkins;

use config::Config;
use jenkins::JenkinsClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("FAIL: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Triggering {}{} ...",
        config.jenkins_url.origin().ascii_serialization(),
        config.jenkins_url.path()
    );

    let client = JenkinsClient::new(config.jenkins_url, config.jenkins_token);
    match client.trigger_build().await {
        Ok(()) => println!("   OK. Jenkins accepted the trigger."),
        Err(e) => {
            println!("   FAIL: {}", e);
            println!("   Check JENKINS_URL points at the job's /build endpoint and that");
            println!("   \"Trigger builds remotely\" uses the same token as JENKINS_TOKEN.");
            std::process::exit(1);
        }
    }
}
