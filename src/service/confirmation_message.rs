use crate::models::row::Row;

const SUBJECT_PREFIX: &str = "[Workspace Automation]";

pub struct ConfirmationMessageService;

impl ConfirmationMessageService {
    pub fn build(row: &Row) -> (String, String) {
        let subject = format!("{} Event confirmation: {}", SUBJECT_PREFIX, row.title);
        let body = format!(
            "Hi {name},\n\n\
             The automation system has created the event \"{title}\" on {date} at {time}.\n\n\
             Check your calendar.\n\n\
             Regards,\nThe Automation Team",
            name = row.name,
            title = row.title,
            date = row.date,
            time = row.time,
        );
        (subject, body)
    }

    pub fn event_description(row: &Row) -> String {
        format!(
            "Event generated automatically by workspace automation for {}.",
            row.name
        )
    }
}
