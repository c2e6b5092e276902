use datafaker_core::{Catalog, Error};
use datafaker_generate::{
    FakeProducer, GeneratedValue, GenerationError, LocaleKey, ValueProducer, adapt_columns,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn assert_expected_shape(name: &str, value: &GeneratedValue) {
    match name {
        "bool" => assert!(matches!(value, GeneratedValue::Bool(_)), "{name}: {value:?}"),
        "Number" => assert!(matches!(value, GeneratedValue::Int(_)), "{name}: {value:?}"),
        "Time" => assert!(matches!(value, GeneratedValue::Time(_)), "{name}: {value:?}"),
        "Date And Time" | "Time And Date" => {
            assert!(matches!(value, GeneratedValue::Timestamp(_)), "{name}: {value:?}")
        }
        "Id Number" | "Unique" => {
            assert!(matches!(value, GeneratedValue::Uuid(_)), "{name}: {value:?}")
        }
        _ => {
            let text = value.as_str().unwrap_or_default();
            assert!(!text.trim().is_empty(), "{name} produced {value:?}");
        }
    }
}

#[test]
fn supported_names_generate_in_every_locale() {
    let catalog = Catalog::builtin();
    for locale in [LocaleKey::EnUs, LocaleKey::ZhCn] {
        let producer = FakeProducer::new(locale);
        assert_eq!(producer.locale(), locale);
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for name in FakeProducer::supported_names() {
            assert!(catalog.find_by_name(name).is_ok(), "{name} not in catalog");
            let value = producer
                .generate(name, &mut rng)
                .unwrap_or_else(|err| panic!("{name} in {locale}: {err}"));
            assert_expected_shape(name, &value);
        }
    }
}

#[test]
fn misses_and_unsupported_names_are_distinct_errors() {
    let producer = FakeProducer::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let miss = producer.generate("definitely not a generator", &mut rng);
    assert!(matches!(
        miss,
        Err(GenerationError::Catalog(Error::LookupMiss(_)))
    ));

    let unsupported = Catalog::builtin()
        .list_all()
        .iter()
        .find(|descriptor| !producer.supports(descriptor.name))
        .expect("catalog has names without a routine");
    assert!(matches!(
        producer.generate(unsupported.name, &mut rng),
        Err(GenerationError::Unsupported(_))
    ));
}

#[test]
fn unknown_locale_string_is_rejected() {
    assert!(FakeProducer::from_locale(Some("zh_CN")).is_ok());
    assert!(matches!(
        FakeProducer::from_locale(Some("de_DE")),
        Err(GenerationError::InvalidRequest(_))
    ));
}

#[test]
fn adapted_columns_are_generatable() {
    let producer = FakeProducer::default();
    let columns = [
        ("row_uuid", "uuid"),
        ("email", "varchar"),
        ("score", "decimal(10,2)"),
        ("enabled", "bool"),
        ("created_at", "timestamptz"),
        ("meta", "json"),
        ("website_url", "text"),
    ];
    let adapted = adapt_columns(columns);
    assert_eq!(
        adapted,
        vec![
            "Id Number",
            "Internet",
            "Number",
            "bool",
            "Date And Time",
            "Lorem",
            "Domain",
        ]
    );
    for name in adapted {
        assert!(producer.supports(name));
    }
}
