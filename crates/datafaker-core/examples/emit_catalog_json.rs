use datafaker_core::{file_extension_types, list_all};

fn main() {
    let payload = serde_json::json!({
        "descriptors": list_all(),
        "file_extension_types": file_extension_types(),
    });
    let json = serde_json::to_string_pretty(&payload).expect("serialize catalog");
    println!("{json}");
}
