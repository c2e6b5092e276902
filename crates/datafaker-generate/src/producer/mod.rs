//! Value producers: turn a catalog descriptor name into a fake value.
//!
//! `FakeProducer` backs a subset of the catalog with routines from the `fake`
//! crate plus a few built-in vocabularies. A name outside the catalog is a
//! lookup miss; a catalog name without a routine is reported as unsupported.

mod wordlists;

use chrono::{NaiveTime, Utc};
use datafaker_core::Catalog;
use fake::Fake;
use fake::faker::address::raw as address;
use fake::faker::barcode::raw as barcode;
use fake::faker::boolean::raw as boolean;
use fake::faker::chrono::raw as chrono_fake;
use fake::faker::color::raw as color;
use fake::faker::company::raw as company;
use fake::faker::creditcard::raw as creditcard;
use fake::faker::currency::raw as currency;
use fake::faker::filesystem::raw as filesystem;
use fake::faker::finance::raw as finance;
use fake::faker::impls::address::CityNameGenFn;
use fake::faker::internet::raw as internet;
use fake::faker::job::raw as job;
use fake::faker::lorem::raw as lorem;
use fake::faker::name::raw as name;
use fake::faker::phone_number::raw as phone_number;
use fake::locales::{Data, EN, ZH_CN};
use fake::uuid::UUIDv4;
use rand::{Rng, RngCore};

use crate::errors::GenerationError;
use crate::locales::LocaleKey;
use crate::value::GeneratedValue;

/// Resolves a descriptor name to a generated value.
pub trait ValueProducer: Send + Sync {
    fn supports(&self, descriptor: &str) -> bool;

    fn generate(
        &self,
        descriptor: &str,
        rng: &mut dyn RngCore,
    ) -> Result<GeneratedValue, GenerationError>;
}

#[derive(Clone, Copy, Debug)]
enum Routine {
    Address,
    Bic,
    Bool,
    City,
    Coordinates,
    CompanyName,
    Buzzword,
    Country,
    CreditCard,
    CurrencyCode,
    DateTime,
    Domain,
    DrivingLicense,
    Duration,
    Email,
    FileName,
    FullName,
    Hash,
    HexColor,
    Industry,
    Isbn,
    Isbn13,
    JobTitle,
    Money,
    Number,
    Paragraph,
    Passport,
    Phone,
    Sentence,
    Team,
    Time,
    University,
    Uuid,
    Word,
    Pick(&'static [&'static str]),
}

const ROUTINES: &[(&str, Routine)] = &[
    ("address", Routine::Address),
    ("animal", Routine::Pick(wordlists::ANIMAL)),
    ("barcode", Routine::Isbn13),
    ("blood type", Routine::Pick(wordlists::BLOOD_TYPE)),
    ("bool", Routine::Bool),
    ("business", Routine::CreditCard),
    ("cat", Routine::Pick(wordlists::CAT_BREED)),
    ("Code", Routine::Isbn),
    ("Coffee", Routine::Pick(wordlists::COFFEE)),
    ("Coin", Routine::Pick(wordlists::COIN)),
    ("Color", Routine::HexColor),
    ("Company", Routine::CompanyName),
    ("Compass", Routine::Pick(wordlists::COMPASS)),
    ("Computer", Routine::Pick(wordlists::COMPUTER_OS)),
    ("Country", Routine::Country),
    ("Crypto Coin", Routine::Pick(wordlists::CRYPTO_COIN)),
    ("Currency", Routine::CurrencyCode),
    ("Date And Time", Routine::DateTime),
    ("Demographic", Routine::Pick(wordlists::DEMOGRAPHIC)),
    ("Dessert", Routine::Pick(wordlists::DESSERT)),
    ("Dog", Routine::Pick(wordlists::DOG_BREED)),
    ("Domain", Routine::Domain),
    ("Driving License", Routine::DrivingLicense),
    ("Emoji", Routine::Pick(wordlists::EMOJI)),
    ("Fake Duration", Routine::Duration),
    ("File", Routine::FileName),
    ("Finance", Routine::Bic),
    ("Food", Routine::Pick(wordlists::FOOD)),
    ("Garment Size", Routine::Pick(wordlists::GARMENT_SIZE)),
    ("Gender", Routine::Pick(wordlists::GENDER)),
    ("Hashing", Routine::Hash),
    ("Hobby", Routine::Pick(wordlists::HOBBY)),
    ("Horse", Routine::Pick(wordlists::HORSE_BREED)),
    ("Id Number", Routine::Uuid),
    ("Industry Segments", Routine::Industry),
    ("Internet", Routine::Email),
    ("Job", Routine::JobTitle),
    ("Language Code", Routine::Pick(wordlists::LANGUAGE_CODE)),
    ("Locality", Routine::City),
    ("Location", Routine::Coordinates),
    ("Lorem", Routine::Sentence),
    ("Marketing", Routine::Buzzword),
    ("Mbti", Routine::Pick(wordlists::MBTI)),
    ("Measurement", Routine::Pick(wordlists::MEASUREMENT)),
    ("Military", Routine::Pick(wordlists::MILITARY_RANK)),
    ("Money", Routine::Money),
    ("Mood", Routine::Pick(wordlists::MOOD)),
    ("Name", Routine::FullName),
    ("Nation", Routine::Country),
    ("Nato Phonetic Alphabet", Routine::Pick(wordlists::NATO_PHONETIC)),
    ("Number", Routine::Number),
    ("Passport", Routine::Passport),
    ("Phone Number", Routine::Phone),
    ("Planet", Routine::Pick(wordlists::PLANET)),
    ("Programming Language", Routine::Pick(wordlists::PROGRAMMING_LANGUAGE)),
    ("Pronouns", Routine::Pick(wordlists::PRONOUNS)),
    ("Relationship", Routine::Pick(wordlists::RELATIONSHIP)),
    ("Science", Routine::Pick(wordlists::SCIENCE_ELEMENT)),
    ("Subscription", Routine::Pick(wordlists::SUBSCRIPTION_PLAN)),
    ("Tea", Routine::Pick(wordlists::TEA)),
    ("Team", Routine::Team),
    ("Text", Routine::Paragraph),
    ("Time", Routine::Time),
    ("Time And Date", Routine::DateTime),
    ("Transport", Routine::Pick(wordlists::TRANSPORT)),
    ("Unique", Routine::Uuid),
    ("University", Routine::University),
    ("Vehicle", Routine::Pick(wordlists::VEHICLE_MAKE)),
    ("Weather", Routine::Pick(wordlists::WEATHER)),
    ("Word", Routine::Word),
    ("Zodiac", Routine::Pick(wordlists::ZODIAC)),
];

fn routine_for(descriptor: &str) -> Option<Routine> {
    ROUTINES
        .iter()
        .find(|(name, _)| *name == descriptor)
        .map(|(_, routine)| *routine)
}

/// Producer backed by the `fake` crate.
#[derive(Debug, Clone)]
pub struct FakeProducer {
    locale: LocaleKey,
    catalog: Catalog,
}

impl FakeProducer {
    pub fn new(locale: LocaleKey) -> Self {
        Self {
            locale,
            catalog: Catalog::builtin(),
        }
    }

    /// Build from an optional locale string such as `zh_CN`.
    pub fn from_locale(locale: Option<&str>) -> Result<Self, GenerationError> {
        let key = match locale {
            None => LocaleKey::default(),
            Some(value) => LocaleKey::parse(value).ok_or_else(|| {
                GenerationError::InvalidRequest(format!("unsupported locale '{value}'"))
            })?,
        };
        Ok(Self::new(key))
    }

    pub fn locale(&self) -> LocaleKey {
        self.locale
    }

    /// Descriptor names this producer can generate, in table order.
    pub fn supported_names() -> impl Iterator<Item = &'static str> {
        ROUTINES.iter().map(|(name, _)| *name)
    }
}

impl Default for FakeProducer {
    fn default() -> Self {
        Self::new(LocaleKey::default())
    }
}

impl ValueProducer for FakeProducer {
    fn supports(&self, descriptor: &str) -> bool {
        routine_for(descriptor).is_some()
    }

    fn generate(
        &self,
        descriptor: &str,
        rng: &mut dyn RngCore,
    ) -> Result<GeneratedValue, GenerationError> {
        self.catalog.find_by_name(descriptor)?;
        let routine = routine_for(descriptor).ok_or_else(|| {
            GenerationError::Unsupported(format!("no producer for descriptor '{descriptor}'"))
        })?;
        let value = match self.locale {
            LocaleKey::EnUs => run_routine(routine, EN, rng),
            LocaleKey::ZhCn => run_routine(routine, ZH_CN, rng),
        };
        Ok(value)
    }
}

fn run_routine<L: Data + CityNameGenFn>(
    routine: Routine,
    locale: L,
    rng: &mut dyn RngCore,
) -> GeneratedValue {
    match routine {
        Routine::Address => {
            let building: String = address::BuildingNumber(locale).fake_with_rng(rng);
            let street: String = address::StreetName(locale).fake_with_rng(rng);
            let city: String = address::CityName(locale).fake_with_rng(rng);
            let zip: String = address::ZipCode(locale).fake_with_rng(rng);
            text(format!("{building} {street}, {city} {zip}"))
        }
        Routine::Bic => text(finance::Bic(locale).fake_with_rng::<String, _>(rng)),
        Routine::Bool => GeneratedValue::Bool(boolean::Boolean(locale, 50).fake_with_rng(rng)),
        Routine::City => text(address::CityName(locale).fake_with_rng::<String, _>(rng)),
        Routine::Coordinates => {
            let latitude: String = address::Latitude(locale).fake_with_rng(rng);
            let longitude: String = address::Longitude(locale).fake_with_rng(rng);
            text(format!("{latitude},{longitude}"))
        }
        Routine::CompanyName => text(company::CompanyName(locale).fake_with_rng::<String, _>(rng)),
        Routine::Buzzword => text(company::Buzzword(locale).fake_with_rng::<String, _>(rng)),
        Routine::Country => text(address::CountryName(locale).fake_with_rng::<String, _>(rng)),
        Routine::CreditCard => {
            text(creditcard::CreditCardNumber(locale).fake_with_rng::<String, _>(rng))
        }
        Routine::CurrencyCode => {
            text(currency::CurrencyCode(locale).fake_with_rng::<String, _>(rng))
        }
        Routine::DateTime => {
            let value: chrono::DateTime<Utc> = chrono_fake::DateTime(locale).fake_with_rng(rng);
            GeneratedValue::Timestamp(value.naive_utc())
        }
        Routine::Domain => {
            let word: String = lorem::Word(locale).fake_with_rng(rng);
            let suffix: String = internet::DomainSuffix(locale).fake_with_rng(rng);
            text(format!("{}.{suffix}", word.to_lowercase()))
        }
        Routine::DrivingLicense => {
            let letter = random_upper(rng);
            text(format!("{letter}{}", random_digits(rng, 8)))
        }
        Routine::Duration => {
            let hours = rng.random_range(0..48);
            let minutes = rng.random_range(0..60);
            let seconds = rng.random_range(0..60);
            text(format!("PT{hours}H{minutes}M{seconds}S"))
        }
        Routine::Email => text(internet::SafeEmail(locale).fake_with_rng::<String, _>(rng)),
        Routine::FileName => text(filesystem::FileName(locale).fake_with_rng::<String, _>(rng)),
        Routine::FullName => text(name::Name(locale).fake_with_rng::<String, _>(rng)),
        Routine::Hash => {
            let mut digest = String::with_capacity(64);
            for _ in 0..32 {
                let byte: u8 = rng.random();
                digest.push_str(&format!("{byte:02x}"));
            }
            text(digest)
        }
        Routine::HexColor => text(color::HexColor(locale).fake_with_rng::<String, _>(rng)),
        Routine::Industry => text(company::Industry(locale).fake_with_rng::<String, _>(rng)),
        Routine::Isbn => text(barcode::Isbn(locale).fake_with_rng::<String, _>(rng)),
        Routine::Isbn13 => text(barcode::Isbn13(locale).fake_with_rng::<String, _>(rng)),
        Routine::JobTitle => text(job::Title(locale).fake_with_rng::<String, _>(rng)),
        Routine::Money => {
            let code: String = currency::CurrencyCode(locale).fake_with_rng(rng);
            let cents: i64 = rng.random_range(100..=1_000_000);
            text(format!("{}.{:02} {code}", cents / 100, cents % 100))
        }
        Routine::Number => GeneratedValue::Int(rng.random_range(0..=100_000)),
        Routine::Paragraph => text(lorem::Paragraph(locale, 2..4).fake_with_rng::<String, _>(rng)),
        Routine::Passport => {
            let first = random_upper(rng);
            let second = random_upper(rng);
            text(format!("{first}{second}{}", random_digits(rng, 7)))
        }
        Routine::Phone => {
            text(phone_number::PhoneNumber(locale).fake_with_rng::<String, _>(rng))
        }
        Routine::Sentence => text(lorem::Sentence(locale, 4..10).fake_with_rng::<String, _>(rng)),
        Routine::Team => {
            let city: String = address::CityName(locale).fake_with_rng(rng);
            text(format!("{city} {}", pick(wordlists::TEAM_MASCOT, rng)))
        }
        Routine::Time => {
            let seconds = rng.random_range(0..86_400);
            GeneratedValue::Time(
                NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or_default(),
            )
        }
        Routine::University => {
            let city: String = address::CityName(locale).fake_with_rng(rng);
            text(format!("{city} University"))
        }
        Routine::Uuid => {
            let id: uuid::Uuid = UUIDv4.fake_with_rng(rng);
            GeneratedValue::Uuid(id.to_string())
        }
        Routine::Word => text(lorem::Word(locale).fake_with_rng::<String, _>(rng)),
        Routine::Pick(words) => text(pick(words, rng).to_string()),
    }
}

fn text(value: String) -> GeneratedValue {
    GeneratedValue::Text(value)
}

fn pick(words: &'static [&'static str], rng: &mut dyn RngCore) -> &'static str {
    if words.is_empty() {
        return "";
    }
    words[rng.random_range(0..words.len())]
}

fn random_upper(rng: &mut dyn RngCore) -> char {
    char::from(rng.random_range(b'A'..=b'Z'))
}

fn random_digits(rng: &mut dyn RngCore, count: usize) -> String {
    (0..count)
        .map(|_| char::from(rng.random_range(b'0'..=b'9')))
        .collect()
}
