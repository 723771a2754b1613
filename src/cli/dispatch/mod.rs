use crate::cli::actions::Action;
use anyhow::{Context, Result, anyhow};
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some(("discussions", _)) => Ok(Action::Discussions),
        Some(("members", _)) => Ok(Action::Members),
        Some(("traffic", sub)) => Ok(Action::Traffic {
            location: sub.get_one::<String>("location").cloned(),
        }),
        Some(("environmental", sub)) => Ok(Action::Environmental {
            location: sub.get_one::<String>("location").cloned(),
        }),
        Some(("transit", _)) => Ok(Action::Transit),
        Some(("route", sub)) => Ok(Action::Route {
            id: sub
                .get_one::<String>("id")
                .cloned()
                .context("missing required argument: id")?,
        }),
        Some(("vehicle", sub)) => Ok(Action::Vehicle {
            id: sub
                .get_one::<String>("id")
                .cloned()
                .context("missing required argument: id")?,
        }),
        Some(("alerts", _)) => Ok(Action::Alerts),
        Some(("flags", sub)) => Ok(Action::Flags {
            status: sub
                .get_one::<String>("status")
                .cloned()
                .unwrap_or_else(|| "all".to_string()),
        }),
        Some(("login", sub)) => Ok(Action::Login {
            email: sub
                .get_one::<String>("email")
                .cloned()
                .context("missing required argument: email")?,
            password: SecretString::from(
                sub.get_one::<String>("password")
                    .cloned()
                    .context("missing required argument: password")?,
            ),
        }),
        _ => Err(anyhow!("missing subcommand")),
    }
}
