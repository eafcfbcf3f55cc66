use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use forma_form::{FormConfig, FormController, FormError, FormField, FormModel};

use super::{ValuesArgs, read};
use crate::contact::{self, ContactField, ContactForm};

#[derive(Args, Debug)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub values: ValuesArgs,

    /// JSON file with controller settings.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Types every value into the form, leaving each field as a user would,
/// then submits.
pub fn run(args: &SubmitArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => FormConfig::from_json(&read(path)?)
            .with_context(|| format!("loading {}", path.display()))?,
        None => FormConfig::default(),
    };

    let mut form =
        FormController::new(ContactForm::default(), contact::schema()).with_config(config);
    for (field, value) in args.values.assignments()? {
        form.handle_change(field, value)?;
        form.handle_blur(field);
    }

    match form.handle_submit(ContactForm::snapshot) {
        Ok(values) => {
            println!("{}", serde_json::to_string_pretty(&values)?);
            Ok(())
        }
        Err(FormError::Invalid { fields }) => {
            eprintln!("Submission withheld: {} field(s) invalid.", fields.len());
            let mut hidden = 0;
            for &field in ContactField::ALL {
                match form.visible_error(field) {
                    Some(message) => println!("{}: {message}", field.name()),
                    None if form.error(field).is_some() => hidden += 1,
                    None => {}
                }
            }
            if hidden > 0 {
                eprintln!("{hidden} more error(s) on fields not yet touched.");
            }
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
