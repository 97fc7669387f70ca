use colored::Colorize;
use encdec::api::{CmdMessage, MessageLevel};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_config_entries(entries: &[(String, String)]) {
    for (key, value) in entries {
        println!("{} = {}", key, value);
    }
}
