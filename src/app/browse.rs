use crate::core::catalog::Catalog;
use crate::core::session::{Outcome, Session, UiEvent};
use crate::domain::model::{ContactInfo, ResolvedAsset, ServiceId, SiteInfo};
use crate::domain::ports::{MailHandoff, PageContext, PageRenderer};
use crate::render::TextRenderer;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  list          show the page
  more <id>     Learn More about a service
  book <id>     Book Consultation from a card
  book          Book Consultation from the open details
  close         close the details
  outside       click outside the details
  contact       show contact details
  help          show this help
  quit          leave
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    List,
    Event(UiEvent),
    Contact,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> std::result::Result<BrowseCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(BrowseCommand::List);
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(format!("Too many arguments for '{}'", verb));
    }

    let parse_id = |raw: Option<&str>| -> std::result::Result<ServiceId, String> {
        let raw = raw.ok_or_else(|| format!("'{}' needs a service id", verb))?;
        raw.parse::<u32>()
            .map(ServiceId)
            .map_err(|_| format!("'{}' is not a service id", raw))
    };

    match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(BrowseCommand::List),
        "more" | "learn" => Ok(BrowseCommand::Event(UiEvent::LearnMore(parse_id(arg)?))),
        "book" => match arg {
            Some(_) => Ok(BrowseCommand::Event(UiEvent::BookFromCard(parse_id(arg)?))),
            None => Ok(BrowseCommand::Event(UiEvent::BookFromModal)),
        },
        "close" | "x" => Ok(BrowseCommand::Event(UiEvent::Close)),
        "outside" => Ok(BrowseCommand::Event(UiEvent::BackdropClick)),
        "contact" => Ok(BrowseCommand::Contact),
        "help" | "?" => Ok(BrowseCommand::Help),
        "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
        other => Err(format!("Unknown command '{}', try 'help'", other)),
    }
}

/// Terminal front end: reads commands, applies them to the session and
/// prints what the visitor would now see.
pub struct Browser<'a, M: MailHandoff> {
    session: Session<'a, M>,
    site: &'a SiteInfo,
    contact: &'a ContactInfo,
    assets: HashMap<ServiceId, ResolvedAsset>,
    renderer: TextRenderer,
    year: i32,
}

impl<'a, M: MailHandoff> Browser<'a, M> {
    pub fn new(
        catalog: &'a Catalog,
        site: &'a SiteInfo,
        contact: &'a ContactInfo,
        assets: HashMap<ServiceId, ResolvedAsset>,
        mail: M,
        year: i32,
    ) -> Self {
        Self {
            session: Session::new(catalog, contact.email.clone(), mail),
            site,
            contact,
            assets,
            renderer: TextRenderer::new(),
            year,
        }
    }

    pub fn session(&self) -> &Session<'a, M> {
        &self.session
    }

    fn context(&self) -> PageContext<'_> {
        PageContext {
            catalog: self.session.catalog(),
            selection: self.session.state(),
            site: self.site,
            contact: self.contact,
            assets: &self.assets,
            year: self.year,
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        write!(out, "{}", self.renderer.render_page(&self.context())?)?;
        writeln!(out, "\nType 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(BrowseCommand::Quit) => break,
                Ok(command) => self.apply(command, out)?,
                Err(message) => writeln!(out, "{}", message)?,
            }
        }

        tracing::debug!("Browse session ended");
        Ok(())
    }

    fn apply<W: Write>(&mut self, command: BrowseCommand, out: &mut W) -> Result<()> {
        match command {
            BrowseCommand::List => write!(out, "{}", self.renderer.render_page(&self.context())?)?,
            BrowseCommand::Contact => write!(out, "{}", self.renderer.render_contact(&self.context()))?,
            BrowseCommand::Help => write!(out, "{}", HELP)?,
            BrowseCommand::Quit => {}
            BrowseCommand::Event(event) => match self.session.dispatch(event) {
                Ok(Outcome::Updated) => match self.renderer.render_modal(&self.context()) {
                    Some(modal) => write!(out, "{}", modal)?,
                    None => writeln!(out, "Details closed.")?,
                },
                Ok(Outcome::Unchanged) => writeln!(out, "Nothing is open.")?,
                Ok(Outcome::Requested(request)) => {
                    writeln!(out, "Consultation request ready: {}", request.subject)?;
                    writeln!(out, "Sent to your mail client, addressed to {}.", request.recipient)?;
                }
                Err(e) => writeln!(out, "{}", e.user_friendly_message())?,
            },
        }
        Ok(())
    }
}
