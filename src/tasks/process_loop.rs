use chrono_tz::Tz;

use crate::clients::calendar_client::{CalendarClient, EventDraft};
use crate::clients::mail_client::MailClient;
use crate::clients::sheet_client::SheetClient;
use crate::models::row::{parse_rows, Row, RowStatus};
use crate::service::confirmation_message::ConfirmationMessageService;
use crate::service::event_window::compose_event_window;

pub trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{}", message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    Processed,
    Skipped,
    Failed(String),
}

// One full pass over the sheet snapshot. Rows run strictly in order; a
// row's failure marks that row and never stops the pass. Only failures of
// the sheet itself abort.
pub async fn process_pass<S, C, M, L>(
    sheet: &S,
    calendar: &C,
    mailer: &M,
    logger: &L,
    tz: Tz,
) -> Result<(), String>
where
    S: SheetClient + ?Sized,
    C: CalendarClient + ?Sized,
    M: MailClient + ?Sized,
    L: Logger + ?Sized,
{
    let grid = sheet.fetch_grid().await?;
    for row in parse_rows(&grid) {
        match process_row(&row, calendar, mailer, logger, tz).await {
            ProcessingResult::Skipped => {}
            ProcessingResult::Processed => {
                sheet.write_status(row.index, RowStatus::Processed).await?;
                logger.log(&format!("Row {} processed for {}", row.index + 1, row.email));
            }
            ProcessingResult::Failed(reason) => {
                logger.log(&format!("Critical error in row {}: {}", row.index + 1, reason));
                sheet.write_status(row.index, RowStatus::Error).await?;
            }
        }
    }
    Ok(())
}

pub async fn process_row<C, M, L>(
    row: &Row,
    calendar: &C,
    mailer: &M,
    logger: &L,
    tz: Tz,
) -> ProcessingResult
where
    C: CalendarClient + ?Sized,
    M: MailClient + ?Sized,
    L: Logger + ?Sized,
{
    // Idempotency gate: finished and incomplete rows are never touched.
    if row.status == RowStatus::Processed || row.name.is_empty() || row.email.is_empty() {
        return ProcessingResult::Skipped;
    }

    let (start, end) = match compose_event_window(&row.date, &row.time, tz) {
        Ok(window) => window,
        Err(reason) => return ProcessingResult::Failed(reason),
    };

    let draft = EventDraft {
        title: row.title.clone(),
        start,
        end,
        description: ConfirmationMessageService::event_description(row),
        guest: row.email.clone(),
        send_invites: true,
    };
    if let Err(err) = calendar.create_event(&draft).await {
        return ProcessingResult::Failed(format!("Failed to create calendar event: {}", err));
    }

    // The event is the primary artifact. A failed confirmation email is
    // logged and the row still counts as processed.
    let (subject, body) = ConfirmationMessageService::build(row);
    if let Err(err) = mailer.send_email(&row.email, &subject, &body).await {
        logger.log(&format!(
            "Warning: could not send confirmation email to {}. The pass continues. ({})",
            row.email, err
        ));
    }

    ProcessingResult::Processed
}
