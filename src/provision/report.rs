//! Human-readable progress output on stdout.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::ProvisionedWebhook;

/// Documentation of the anonymous webhook execution call.
pub const EXECUTE_DOC_URL: &str = "http://docs.rackspace.com/cas/api/v1.0/autoscale-devguide/content\
/POST_anonymousExecute_v1.0_execute__capability_version___capability_hash__Executions.html";

/// Serializes `value` as JSON indented with four spaces.
///
/// # Errors
///
/// Returns an error if `value` cannot be serialized.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes progress lines for one run.
///
/// In verbose mode every request payload and response body is dumped
/// as JSON, and the final section explains how to call the webhooks.
#[derive(Debug)]
pub struct Report<'w, W> {
    out: &'w mut W,
    verbose: bool,
}

impl<'w, W: Write> Report<'w, W> {
    pub const fn new(out: &'w mut W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    pub fn starting(&mut self, dry_run: bool) -> io::Result<()> {
        let mode = if dry_run { "dry run" } else { "execution" };
        writeln!(self.out, "\nStarting {mode} for Auto Scale group setup")
    }

    pub fn group_preview<T: Serialize + ?Sized>(
        &mut self,
        url: &url::Url,
        payload: &T,
    ) -> io::Result<()> {
        writeln!(self.out, "\nGroup endpoint to send POST request to:\n{url}")?;
        writeln!(self.out, "\nGroup Configuration Object to be sent through API")?;
        self.json(payload)
    }

    pub fn webhook_preview<T: Serialize + ?Sized>(
        &mut self,
        url: &url::Url,
        payload: &T,
    ) -> io::Result<()> {
        writeln!(self.out, "\nWebhook endpoint to send POST request to:\n{url}")?;
        writeln!(self.out, "\nWebhook data object to be sent through API")?;
        self.json(payload)
    }

    pub fn planned_policies<'a>(
        &mut self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> io::Result<()> {
        let names: Vec<&str> = names.into_iter().collect();
        writeln!(
            self.out,
            "\nThe same webhook request is sent once per created policy ({}): {}",
            names.len(),
            names.join(", ")
        )
    }

    pub fn sending<T: Serialize + ?Sized>(
        &mut self,
        what: &str,
        url: &url::Url,
        payload: &T,
    ) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        writeln!(self.out, "\nSending {what} request to:\n{url}")?;
        self.json(payload)
    }

    pub fn group_created(&mut self, response: &serde_json::Value) -> io::Result<()> {
        writeln!(self.out, "\nGroup successfully created")?;
        self.verbose_json(response)
    }

    pub fn webhook_created(&mut self, response: &serde_json::Value) -> io::Result<()> {
        writeln!(self.out, "\nWebhook was successfully created")?;
        self.verbose_json(response)
    }

    /// Writes the final webhook URL listing.
    pub fn webhook_urls(&mut self, webhooks: &[ProvisionedWebhook]) -> io::Result<()> {
        if self.verbose {
            return self.usage_instructions(webhooks);
        }

        writeln!(self.out, "\n------------------ WebHook URLs --------------------")?;
        self.url_list(webhooks)?;
        writeln!(self.out, "\n----------------------------------------------------\n")
    }

    fn usage_instructions(&mut self, webhooks: &[ProvisionedWebhook]) -> io::Result<()> {
        writeln!(
            self.out,
            "\nTo use the webhook(s) you will need to issue a POST request to \
             the following URL(s):"
        )?;
        self.url_list(webhooks)?;

        writeln!(
            self.out,
            "\nFor example, for the new webhooks you could issue the request \
             like the following:\n"
        )?;
        for webhook in webhooks {
            writeln!(
                self.out,
                "Curl request for Policy - {}:\n\
                 curl -XPOST -H \"Content-Type: application/json\" {}\n",
                webhook.policy_name, webhook.webhook_url
            )?;
        }

        writeln!(
            self.out,
            "You should receive a status return code of 202 once complete.\
             \n\nYou can view the documentation at the following URL for more \
             information:\n{EXECUTE_DOC_URL}\n"
        )
    }

    fn url_list(&mut self, webhooks: &[ProvisionedWebhook]) -> io::Result<()> {
        for webhook in webhooks {
            writeln!(
                self.out,
                "\nWebhook URL for Policy - {}:\n{}",
                webhook.policy_name, webhook.webhook_url
            )?;
        }
        Ok(())
    }

    fn verbose_json(&mut self, value: &serde_json::Value) -> io::Result<()> {
        if self.verbose { self.json(value) } else { Ok(()) }
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        let text = to_pretty_json(value).map_err(io::Error::other)?;
        writeln!(self.out, "{text}")
    }
}
