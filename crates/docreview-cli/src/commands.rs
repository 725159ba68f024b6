//! Subcommand bodies. Each one signs in first, then renders to `out`.

use std::io::Write;

use anyhow::{Context, bail};
use docreview_core::{
    DocumentSource, RecordingNotifier, RecordingViewer, ReviewError, SessionContext, StatusFilter,
};

use crate::cli::Command;
use crate::display;

/// Credentials taken from the command line or environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

pub fn run(
    out: &mut impl Write,
    source: &dyn DocumentSource,
    session: &mut SessionContext,
    credentials: Credentials<'_>,
    command: Command,
) -> anyhow::Result<()> {
    if !session.login(credentials.email, credentials.password) {
        bail!(
            "invalid email or password (set --email/--password or DOCREVIEW_EMAIL/DOCREVIEW_PASSWORD)"
        );
    }

    let result = match command {
        Command::List { query, status } => list(out, source, session, query, status),
        Command::Review {
            id,
            search,
            focus,
            corrections,
            accept_all,
            save,
        } => {
            let opts = ReviewOptions {
                search,
                focus,
                corrections,
                accept_all,
                save,
            };
            review(out, source, session, &id, opts)
        }
        Command::Whoami => match session.identity() {
            Some(identity) => display::write_identity(out, identity).map_err(Into::into),
            None => Ok(()),
        },
    };

    session.logout();
    result
}

fn list(
    out: &mut impl Write,
    source: &dyn DocumentSource,
    session: &SessionContext,
    query: String,
    status: StatusFilter,
) -> anyhow::Result<()> {
    let mut dashboard = session.dashboard(source)?;
    dashboard.set_query(query);
    dashboard.set_status(status);

    display::write_stats(out, &dashboard.stats())?;
    display::write_document_table(out, &dashboard.visible())?;
    Ok(())
}

struct ReviewOptions {
    search: String,
    focus: Option<String>,
    corrections: Vec<(String, String)>,
    accept_all: bool,
    save: bool,
}

fn review(
    out: &mut impl Write,
    source: &dyn DocumentSource,
    session: &mut SessionContext,
    id: &str,
    opts: ReviewOptions,
) -> anyhow::Result<()> {
    let mut viewer = RecordingViewer::default();
    let review = match session.open_review(source, id, &mut viewer) {
        Ok(review) => review,
        Err(ReviewError::DocumentNotFound(_)) => {
            writeln!(out, "Document not found")?;
            bail!("no document with id {id}");
        }
        Err(e) => return Err(e).context("opening review"),
    };

    if let Some(attr_id) = &opts.focus {
        review.focus(attr_id, &mut viewer);
    }
    for (attr_id, value) in opts.corrections {
        review.set_correction(&attr_id, value);
    }
    review.set_search(opts.search);

    display::write_review(out, review)?;
    display::write_document_panel(out, review, viewer.last())?;

    let mut notifier = RecordingNotifier::default();
    if opts.accept_all {
        review.accept_all(&mut notifier);
    }
    if opts.save {
        review.save_review(&mut notifier);
    }
    for record in &notifier.records {
        display::write_notification(out, record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use docreview_store::InMemorySource;

    const ADMIN: Credentials<'static> = Credentials {
        email: "admin@contract.ai",
        password: "password123",
    };

    fn command(args: &[&str]) -> Command {
        let argv = std::iter::once("docreview").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().command
    }

    fn exec(credentials: Credentials<'_>, args: &[&str]) -> (anyhow::Result<()>, String) {
        let source = InMemorySource::seeded();
        let mut session: SessionContext = SessionContext::default();
        let mut buf = Vec::new();
        let result = run(&mut buf, &source, &mut session, credentials, command(args));
        assert!(!session.is_authenticated());
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn whoami_prints_identity() {
        let (result, text) = exec(ADMIN, &["whoami"]);
        result.unwrap();
        assert_eq!(text, "Admin User <admin@contract.ai>\n");
    }

    #[test]
    fn list_without_credentials_is_rejected() {
        let (result, text) = exec(Credentials::default(), &["list", "--status", "approved"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid email or password"));
        assert!(text.is_empty());
    }

    #[test]
    fn list_filters_by_status() {
        let (result, text) = exec(ADMIN, &["list", "--status", "approved"]);
        result.unwrap();
        assert!(text.contains("Total Documents"));
        assert!(text.contains("Vendor Agreement – Tech Solutions.pdf"));
        assert!(!text.contains("Employment Contract"));
    }

    #[test]
    fn review_with_wrong_password_fails() {
        let creds = Credentials {
            email: "admin@contract.ai",
            password: "password124",
        };
        let (result, text) = exec(creds, &["review", "1"]);
        assert!(result.is_err());
        assert!(text.is_empty());
    }

    #[test]
    fn review_of_unknown_document() {
        let (result, text) = exec(ADMIN, &["review", "42"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("no document with id 42"));
        assert_eq!(text, "Document not found\n");
    }

    #[test]
    fn review_applies_correction_and_acknowledges() {
        let (result, text) = exec(
            ADMIN,
            &[
                "review",
                "1",
                "--focus",
                "attr-5",
                "--correct",
                "attr-5=Net 45 days",
                "--accept-all",
                "--save",
            ],
        );
        result.unwrap();
        assert!(text.contains("Document ID: 1 • 10 attributes • 2 low confidence"));
        assert!(text.contains("Net 45 days"));
        assert!(text.contains("Values Accepted: All extracted values have been accepted."));
        assert!(text.ends_with("Review Saved: Your review has been saved successfully.\n"));
    }
}
