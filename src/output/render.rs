use crate::hash::FileDigest;
use std::io::{self, Write};

/// Substitutes the digest's fields into `template`.
///
/// Only the five known placeholders are replaced, and each value is inserted
/// verbatim.
pub fn render(template: &str, digest: &FileDigest) -> String {
    let mut rendered = String::with_capacity(template.len() + 128);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open..];
        match after.find('}').and_then(|close| {
            field_value(&after[1..close], digest).map(|value| (close, value))
        }) {
            Some((close, value)) => {
                rendered.push_str(&value);
                rest = &after[close + 1..];
            }
            None => {
                rendered.push('{');
                rest = &after[1..];
            }
        }
    }
    rendered.push_str(rest);

    rendered
}

fn field_value(field: &str, digest: &FileDigest) -> Option<String> {
    match field {
        "name" => Some(digest.name.clone()),
        "url" => Some(digest.url.to_owned()),
        "size" => Some(digest.size.to_string()),
        "sha1" => Some(digest.sha1.clone()),
        "sha256" => Some(digest.sha256.clone()),
        _ => None,
    }
}

pub fn write_statement<W: Write>(writer: &mut W, statement: &str) -> io::Result<()> {
    writer.write_all(statement.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}
