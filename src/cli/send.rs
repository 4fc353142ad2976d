use anyhow::Result;
use clap::Args;
use folio_form::{Field, FormController, SubmissionClient, SubmissionStatus};

#[derive(Args, Debug, Clone)]
pub struct SendArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub subject: String,

    #[arg(long)]
    pub message: String,

    /// Backend base URL (overrides config file)
    #[arg(long)]
    pub endpoint: Option<String>,
}

/// Fill the contact form from the command line and submit it once.
pub async fn send(config: crate::config::Config, args: SendArgs) -> Result<SubmissionStatus> {
    let mut client_config: folio_form::ClientConfig = config.client.into();
    if args.endpoint.is_some() {
        client_config.endpoint = args.endpoint;
    }

    let form = FormController::new();
    form.set(Field::Name, args.name);
    form.set(Field::Email, args.email);
    form.set(Field::Subject, args.subject);
    form.set(Field::Message, args.message);

    let client = SubmissionClient::new(client_config)?;
    let status = client.submit(&form).await?;

    if let Some(banner) = status.banner() {
        println!("{banner}");
    }

    Ok(status)
}
