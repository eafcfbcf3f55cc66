use forma_form::FormField;

use crate::contact::{self, ContactField};

pub fn run() {
    let schema = contact::schema();
    for &field in ContactField::ALL {
        let name = field.name();
        match schema.get(name) {
            Some(chain) if !chain.is_empty() => {
                println!("{name}: {}", chain.codes().collect::<Vec<_>>().join(", "));
            }
            _ => println!("{name}: (no rules)"),
        }
    }
}
