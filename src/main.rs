use dotenv::dotenv;
use log::error;
use std::env;
use std::error::Error;
use std::process;

mod config;
mod models;
mod prompt;
mod schedule;
mod services;

use config::Config;
use services::openai_service::{extract_content, OpenAIService};

fn main() {
    // An optional first argument names the .env file explicitly so a
    // cronjob can run the binary from any working directory.
    let env_file = match env::args().nth(1) {
        Some(path) => dotenv::from_path(&path)
            .map_err(|e| format!("Error loading .env file {}: {}", path, e)),
        None => {
            dotenv().ok();
            Ok(())
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = env_file {
        error!("{}", e);
        process::exit(1);
    }

    let config = Config::from_env();
    if let Err(e) = run(&config) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let list = schedule::read_todo_list(&config.todo_list_path)?;
    let prompt = prompt::build_prompt(&config.today, &list);

    let service = OpenAIService::new(config.openai_url.clone(), config.openai_key.clone());
    let body = service.chat(&config.model, &prompt, config.temperature)?;
    let content = extract_content(&body)?;

    schedule::write_daily_schedule(&config.schedule_path, &content)
}
