//! Pick a catalog descriptor for a database column.
//!
//! Column-name hints win over type families; anything unmatched falls back
//! to `Name`. Both are matched on whole words: names split on separators and
//! camelCase humps, types on anything that is not a letter or digit.

const FALLBACK: &str = "Name";

const NAME_HINTS: &[(&[&str], &str)] = &[
    (&["email", "mail"], "Internet"),
    (&["phone", "mobile", "tel", "telephone", "cell"], "Phone Number"),
    (&["address", "addr"], "address"),
    (&["uuid", "guid"], "Id Number"),
    (&["color", "colour"], "Color"),
    (&["url", "domain", "website"], "Domain"),
    (&["file", "filename"], "File"),
];

const TYPE_FAMILIES: &[(&[&str], &str)] = &[
    (
        &[
            "int", "integer", "int2", "int4", "int8", "tinyint", "smallint", "mediumint",
            "bigint", "serial", "smallserial", "bigserial", "number", "numeric", "decimal",
            "float", "float4", "float8", "double", "real",
        ],
        "Number",
    ),
    (&["bool", "boolean"], "bool"),
    (
        &[
            "date", "time", "timetz", "datetime", "datetime2", "smalldatetime", "timestamp",
            "timestamptz",
        ],
        "Date And Time",
    ),
    (&["json", "jsonb", "object"], "Lorem"),
    (
        &[
            "text", "tinytext", "mediumtext", "longtext", "char", "nchar", "varchar", "nvarchar",
            "character", "string", "clob",
        ],
        "Name",
    ),
];

/// Descriptor name for one column.
pub fn adapt_column(field_name: &str, field_type: &str) -> &'static str {
    let name = name_words(field_name);
    let column_type = type_words(field_type);
    if name.is_empty() || column_type.is_empty() {
        return FALLBACK;
    }
    first_hit(NAME_HINTS, &name)
        .or_else(|| first_hit(TYPE_FAMILIES, &column_type))
        .unwrap_or(FALLBACK)
}

/// Adapt `(name, type)` pairs, keeping their order.
pub fn adapt_columns<'a, I>(columns: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    columns
        .into_iter()
        .map(|(name, column_type)| adapt_column(name, column_type))
        .collect()
}

/// `userEmail_2` -> `["user", "email", "2"]`.
fn name_words(value: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut previous_lower = false;
    for c in value.chars() {
        if !c.is_alphanumeric() {
            flush(&mut words, &mut current);
            previous_lower = false;
            continue;
        }
        if c.is_uppercase() && previous_lower {
            flush(&mut words, &mut current);
        }
        previous_lower = c.is_lowercase() || c.is_ascii_digit();
        current.extend(c.to_lowercase());
    }
    flush(&mut words, &mut current);
    words
}

/// `DECIMAL(10, 2)` -> `["decimal", "10", "2"]`.
fn type_words(value: &str) -> Vec<String> {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn first_hit(table: &[(&[&str], &'static str)], words: &[String]) -> Option<&'static str> {
    table
        .iter()
        .find(|(needles, _)| words.iter().any(|word| needles.contains(&word.as_str())))
        .map(|(_, descriptor)| *descriptor)
}
