//! Small built-in vocabularies for descriptors the `fake` crate does not cover.

pub const ANIMAL: &[&str] = &[
    "aardvark", "alligator", "alpaca", "badger", "beaver", "bison", "camel", "cheetah",
    "dolphin", "eagle", "ferret", "giraffe", "hedgehog", "jaguar", "koala", "lemur", "llama",
    "mongoose", "narwhal", "otter", "panda", "penguin", "raccoon", "walrus", "zebra",
];

pub const BLOOD_TYPE: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const CAT_BREED: &[&str] = &[
    "Abyssinian", "Bengal", "Birman", "British Shorthair", "Burmese", "Maine Coon", "Persian",
    "Ragdoll", "Russian Blue", "Siamese", "Sphynx",
];

pub const COFFEE: &[&str] = &[
    "Americano", "Cappuccino", "Cortado", "Espresso", "Flat White", "Latte", "Macchiato",
    "Mocha", "Ristretto", "Cold Brew",
];

pub const COIN: &[&str] = &["Heads", "Tails"];

pub const COMPASS: &[&str] = &[
    "north", "north-northeast", "northeast", "east-northeast", "east", "east-southeast",
    "southeast", "south-southeast", "south", "south-southwest", "southwest", "west-southwest",
    "west", "west-northwest", "northwest", "north-northwest",
];

pub const COMPUTER_OS: &[&str] = &[
    "Windows 11", "Windows 10", "macOS Sonoma", "macOS Ventura", "Ubuntu 24.04", "Debian 12",
    "Fedora 40", "Arch Linux", "FreeBSD 14", "ChromeOS",
];

pub const CRYPTO_COIN: &[&str] = &[
    "Bitcoin", "Ethereum", "Litecoin", "Cardano", "Solana", "Polkadot", "Dogecoin", "Monero",
    "Ripple", "Stellar",
];

pub const DEMOGRAPHIC: &[&str] = &[
    "Single", "Married", "Divorced", "Widowed", "Separated", "Domestic Partnership",
];

pub const DESSERT: &[&str] = &[
    "Apple Pie", "Brownie", "Cheesecake", "Creme Brulee", "Cupcake", "Eclair", "Gelato",
    "Macaron", "Panna Cotta", "Tiramisu",
];

pub const DOG_BREED: &[&str] = &[
    "Beagle", "Border Collie", "Boxer", "Bulldog", "Dachshund", "German Shepherd",
    "Golden Retriever", "Husky", "Labrador Retriever", "Poodle", "Shiba Inu",
];

pub const EMOJI: &[&str] = &[
    "😀", "😂", "😍", "😎", "🤔", "😴", "👍", "👏", "🙏", "🔥", "🎉", "🚀", "🌈", "🍕", "☕",
    "🐱", "🐶", "⚽", "🎵", "💡",
];

pub const FOOD: &[&str] = &[
    "Dumplings", "Fried Rice", "Hot Pot", "Kung Pao Chicken", "Lasagna", "Paella", "Pho",
    "Ramen", "Risotto", "Sushi", "Tacos",
];

pub const GARMENT_SIZE: &[&str] = &["XXS", "XS", "S", "M", "L", "XL", "XXL", "XXXL"];

pub const GENDER: &[&str] = &["Male", "Female", "Non-binary"];

pub const HOBBY: &[&str] = &[
    "Archery", "Baking", "Birdwatching", "Calligraphy", "Chess", "Cycling", "Gardening",
    "Hiking", "Knitting", "Photography", "Pottery", "Reading",
];

pub const HORSE_BREED: &[&str] = &[
    "Akhal-Teke", "Andalusian", "Appaloosa", "Arabian", "Clydesdale", "Friesian", "Mustang",
    "Thoroughbred",
];

pub const LANGUAGE_CODE: &[&str] = &[
    "ar", "de", "en", "es", "fr", "hi", "it", "ja", "ko", "nl", "pt", "ru", "sv", "tr", "zh",
];

pub const MBTI: &[&str] = &[
    "INTJ", "INTP", "ENTJ", "ENTP", "INFJ", "INFP", "ENFJ", "ENFP", "ISTJ", "ISFJ", "ESTJ",
    "ESFJ", "ISTP", "ISFP", "ESTP", "ESFP",
];

pub const MEASUREMENT: &[&str] = &[
    "cup", "gallon", "gram", "inch", "kilogram", "liter", "meter", "mile", "ounce", "pint",
    "pound", "teaspoon",
];

pub const MILITARY_RANK: &[&str] = &[
    "Private", "Corporal", "Sergeant", "Lieutenant", "Captain", "Major", "Colonel",
    "Brigadier General", "General",
];

pub const MOOD: &[&str] = &[
    "amused", "anxious", "calm", "cheerful", "content", "curious", "excited", "grumpy",
    "hopeful", "nostalgic", "relaxed", "tired",
];

pub const NATO_PHONETIC: &[&str] = &[
    "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India",
    "Juliett", "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo",
    "Sierra", "Tango", "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

pub const PLANET: &[&str] = &[
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
];

pub const PROGRAMMING_LANGUAGE: &[&str] = &[
    "C", "C++", "C#", "Elixir", "Go", "Haskell", "Java", "JavaScript", "Kotlin", "Python",
    "Ruby", "Rust", "Scala", "Swift", "TypeScript", "Zig",
];

pub const PRONOUNS: &[&str] = &["they/them", "she/her", "he/him", "ze/zir", "xe/xem"];

pub const RELATIONSHIP: &[&str] = &[
    "Brother", "Sister", "Cousin", "Father", "Mother", "Grandparent", "Uncle", "Aunt",
    "Friend", "Colleague", "Neighbor",
];

pub const SCIENCE_ELEMENT: &[&str] = &[
    "Hydrogen", "Helium", "Lithium", "Carbon", "Nitrogen", "Oxygen", "Sodium", "Iron",
    "Copper", "Silver", "Gold", "Uranium",
];

pub const SUBSCRIPTION_PLAN: &[&str] = &[
    "Free Trial", "Basic", "Starter", "Student", "Standard", "Premium", "Business",
    "Platinum",
];

pub const TEA: &[&str] = &[
    "Assam", "Darjeeling", "Earl Grey", "Jasmine", "Longjing", "Matcha", "Oolong", "Pu-erh",
    "Rooibos", "Sencha",
];

pub const TEAM_MASCOT: &[&str] = &[
    "Bears", "Comets", "Dragons", "Falcons", "Hawks", "Lions", "Pirates", "Rangers",
    "Sharks", "Wolves",
];

pub const TRANSPORT: &[&str] = &[
    "Bicycle", "Bus", "Car", "Ferry", "Helicopter", "Motorcycle", "Plane", "Scooter",
    "Subway", "Train", "Tram",
];

pub const VEHICLE_MAKE: &[&str] = &[
    "Audi", "BMW", "BYD", "Ford", "Honda", "Hyundai", "Kia", "Mazda", "Nissan", "Tesla",
    "Toyota", "Volkswagen",
];

pub const WEATHER: &[&str] = &[
    "Clear", "Cloudy", "Drizzle", "Fog", "Hail", "Overcast", "Rain", "Sleet", "Snow",
    "Sunny", "Thunderstorm", "Windy",
];

pub const ZODIAC: &[&str] = &[
    "Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo", "Libra", "Scorpio", "Sagittarius",
    "Capricorn", "Aquarius", "Pisces",
];
