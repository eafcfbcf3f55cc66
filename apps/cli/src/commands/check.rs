use forma_form::{FormModel, ModelSource};

use super::ValuesArgs;
use crate::contact::{self, ContactForm};

pub fn run(args: &ValuesArgs) -> anyhow::Result<()> {
    let mut form = ContactForm::default();
    for (field, value) in args.assignments()? {
        form.set_value(field, value)?;
    }

    let result = contact::schema().validate(&ModelSource(&form));
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}
