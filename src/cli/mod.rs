pub mod history;
pub mod render;
pub mod shell;

use anyhow::Result;

use crate::companion::CompanionAgent;
use crate::config::LumaConfig;
use crate::journal::TaskRepository;
use crate::llm::openai::OpenAiChatClient;

/// Open the configured database and wrap it in a repository.
pub fn open_repository(config: &LumaConfig) -> Result<TaskRepository> {
    let conn = crate::db::open_database(config.resolved_db_path())?;
    Ok(TaskRepository::new(conn))
}

/// Wire the model client and store together and run the interactive menu on stdin/stdout.
pub async fn interactive(config: &LumaConfig) -> Result<()> {
    let api_key = config.require_api_key()?;
    let repository = open_repository(config)?;
    let model = OpenAiChatClient::from_config(&config.llm, api_key);
    tracing::info!(model = %model.model(), "companion ready");

    let agent = CompanionAgent::new(model, repository);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    shell::run_shell(&agent, &mut input, &mut out).await
}
