use uuid::Uuid;

use crate::clients::calendar_client::HttpCalendarClient;
use crate::clients::mail_client::HttpMailClient;
use crate::clients::sheet_client::CsvSheetClient;
use crate::config::Settings;
use crate::tasks::process_loop::{self, ConsoleLogger, Logger};

pub async fn run_pass(settings: Settings) {
    let sheet = CsvSheetClient::new(settings.sheet_path.clone());
    let calendar = HttpCalendarClient::new(
        settings.calendar_base_url.clone(),
        settings.calendar_token.clone(),
    );
    let mailer = HttpMailClient::new(settings.mail_base_url.clone(), settings.mail_token.clone());
    let logger = ConsoleLogger;

    let pass_id = Uuid::new_v4();
    logger.log(&format!("Starting processing pass {}", pass_id));
    match process_loop::process_pass(&sheet, &calendar, &mailer, &logger, settings.timezone).await {
        Ok(()) => logger.log(&format!("Processing pass {} finished", pass_id)),
        Err(err) => eprintln!("Processing pass {} aborted: {}", pass_id, err),
    }
}
