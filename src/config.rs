use chrono::Local;
use std::env;

const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_TEMPERATURE: f64 = 0.7;

pub struct Config {
    pub todo_list_path: String,
    pub schedule_path: String,
    pub openai_url: String,
    pub openai_key: String,
    pub model: String,
    pub temperature: f64,
    pub today: String,
}

impl Config {
    pub fn from_env() -> Self {
        let today = Local::now().format("%Y-%m-%d").to_string();
        Self::build(
            env::var("SECOND_BRAIN_ROOT").unwrap_or_default(),
            env::var("TODO_LIST_FILE").unwrap_or_default(),
            env::var("OPENAI_URL").unwrap_or_else(|_| DEFAULT_OPENAI_URL.to_string()),
            env::var("OPENAI_API_KEY").unwrap_or_default(),
            env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            env::var("OPENAI_TEMPERATURE")
                .map(|v| v.parse().unwrap_or(DEFAULT_TEMPERATURE))
                .unwrap_or(DEFAULT_TEMPERATURE),
            today,
        )
    }

    // Missing values are not validated here; a malformed path fails at the
    // file read/write and a missing key fails at the API call.
    fn build(
        root: String,
        todo_list_file: String,
        openai_url: String,
        openai_key: String,
        model: String,
        temperature: f64,
        today: String,
    ) -> Self {
        Self {
            todo_list_path: format!("{}/{}", root, todo_list_file),
            schedule_path: format!("{}/{}.org", root, today),
            openai_url,
            openai_key,
            model,
            temperature,
            today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(root: &str, list: &str, today: &str) -> Config {
        Config::build(
            root.to_string(),
            list.to_string(),
            DEFAULT_OPENAI_URL.to_string(),
            "sk-test".to_string(),
            DEFAULT_MODEL.to_string(),
            DEFAULT_TEMPERATURE,
            today.to_string(),
        )
    }

    #[test]
    fn derives_paths_from_root_and_date() {
        let config = config_for("/home/me/brain", "todo.org", "2026-08-28");
        assert_eq!(config.todo_list_path, "/home/me/brain/todo.org");
        assert_eq!(config.schedule_path, "/home/me/brain/2026-08-28.org");
    }

    #[test]
    fn empty_root_yields_malformed_path_without_panicking() {
        let config = config_for("", "", "2026-08-28");
        assert_eq!(config.todo_list_path, "/");
        assert_eq!(config.schedule_path, "/2026-08-28.org");
    }

    #[test]
    fn today_matches_local_clock_date() {
        let config = Config::from_env();
        assert_eq!(config.today, Local::now().format("%Y-%m-%d").to_string());
        assert_eq!(config.today.len(), 10);
        assert!(config.today.as_bytes()[4] == b'-' && config.today.as_bytes()[7] == b'-');
    }
}
