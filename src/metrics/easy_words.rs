//! Familiar words for the Dale-Chall difficult-word count.
//!
//! This is a partial list: the common words of two or more syllables from
//! the Dale-Chall familiar-word list, without inflected forms. Single
//! syllable words are never counted as difficult, so they never need a
//! lookup. Words missing from the list count as difficult, which raises
//! the Dale-Chall score somewhat for plain text.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const FAMILIAR_WORDS: &[&str] = &[
    "able", "about", "above", "absent", "accept", "accident", "account", "acorn", "across",
    "actor", "adventure", "afraid", "after", "afternoon", "afterward", "again", "against",
    "ago", "agree", "ahead", "airplane", "airport", "alarm", "alike", "alive", "alley",
    "alligator", "allow", "almost", "alone", "along", "aloud", "already", "also", "always",
    "among", "amount", "angel", "anger", "angry", "animal", "another", "answer", "any",
    "anybody", "anyone", "anything", "anyway", "anywhere", "apart", "apartment", "appear",
    "apple", "apron", "arithmetic", "army", "around", "arrange", "arrive", "arrow", "artist",
    "asleep", "attack", "attend", "automobile", "autumn", "avenue", "away", "awful", "awhile",
    "baby", "backward", "bacon", "badly", "baker", "bakery", "balloon", "banana", "bandage",
    "barber", "barrel", "basket", "battle", "beautiful", "beauty", "beaver", "became",
    "because", "become", "bedroom", "beehive", "before", "began", "begin", "beginning", "begun",
    "behind", "being", "believe", "belly", "belong", "below", "berry", "beside", "better",
    "between", "beyond", "bicycle", "birthday", "blanket", "blossom", "body", "bonnet",
    "borrow", "bottle", "bottom", "bracelet", "breakfast", "bridle", "brighten", "broken",
    "brother", "bucket", "buckle", "builder", "building", "bundle", "bunny", "burden", "busy",
    "butcher", "butter", "button", "cabbage", "cabin", "cable", "camel", "camera", "candle",
    "candy", "canoe", "captain", "careful", "carpenter", "carpet", "carrot", "carry", "cattle",
    "cellar", "center", "cereal", "certain", "chicken", "children", "chimney", "chocolate",
    "circle", "circus", "citizen", "city", "classroom", "clever", "closet", "clothing", "cocoa",
    "coffee", "collar", "collect", "college", "color", "comfort", "common", "company",
    "compare", "contain", "contest", "cookie", "copy", "corner", "cotton", "country", "cover",
    "cowboy", "cracker", "cradle", "crayon", "crazy", "cricket", "crooked", "cucumber",
    "cupboard", "curtain", "cushion", "cutting", "daddy", "daily", "dairy", "daisy", "dancer",
    "danger", "darling", "daughter", "decide", "declare", "deliver", "dentist", "depend",
    "desert", "dessert", "diamond", "different", "difficult", "dinner", "dinosaur", "direction",
    "dirty", "discover", "distance", "divide", "dizzy", "doctor", "dollar", "donkey", "doorway",
    "double", "dragon", "drawer", "dressing", "driver", "during", "eager", "early",
    "earthquake", "easily", "eastern", "easy", "eaten", "education", "effect", "eighteen",
    "eighty", "elbow", "elephant", "elevator", "eleven", "empty", "enemy", "engine", "engineer",
    "enjoy", "enough", "entrance", "envelope", "equal", "errand", "escape", "even", "evening",
    "ever", "every", "everybody", "everyone", "everything", "everywhere", "evil", "exactly",
    "excellent", "except", "excuse", "explain", "fairy", "family", "famous", "fancy", "farmer",
    "fasten", "father", "favor", "feather", "fellow", "fever", "fifteen", "fifty", "figure",
    "finally", "finger", "finish", "firefly", "fireman", "flannel", "flavor", "flower",
    "follow", "forest", "forget", "forgive", "forty", "forward", "fountain", "fourteen",
    "freedom", "freezer", "friendly", "frighten", "frozen", "fuel", "funny", "furnace",
    "further", "future", "gallon", "garden", "gasoline", "gather", "general", "gentle",
    "gentleman", "getting", "giant", "gingerbread", "given", "glory", "going", "golden",
    "goodbye", "gravy", "grocery", "guitar", "hammer", "handle", "happen", "happiness", "happy",
    "harvest", "having", "healthy", "heaven", "heavy", "hello", "helper", "helpful", "hidden",
    "hiding", "highway", "himself", "history", "hobby", "holiday", "hollow", "homework",
    "honest", "honey", "hospital", "hotel", "however", "human", "hundred", "hungry", "hunter",
    "hurry", "husband", "icicle", "idea", "igloo", "important", "insect", "inside", "instead",
    "interest", "into", "invent", "invite", "iron", "island", "itself", "jacket", "jelly",
    "jewel", "journey", "juicy", "jungle", "kettle", "kingdom", "kitchen", "kitten", "ladder",
    "ladies", "lady", "language", "lantern", "later", "lazy", "leader", "lemon", "leopard",
    "lesson", "letter", "library", "lightning", "lion", "liquid", "listen", "little", "lizard",
    "lonely", "lovely", "lower", "lucky", "lumber", "machine", "magic", "mailbox", "making",
    "manner", "many", "marble", "market", "master", "matter", "maybe", "meadow", "meeting",
    "melon", "member", "message", "metal", "middle", "minute", "mirror", "mitten", "model",
    "modern", "moment", "money", "monkey", "morning", "mother", "motor", "mountain", "music",
    "mustard", "myself", "napkin", "narrow", "nation", "nature", "nearly", "needle", "neighbor",
    "never", "nickel", "nobody", "notebook", "nothing", "notice", "number", "nursery", "ocean",
    "office", "often", "open", "orange", "orchard", "order", "other", "outside", "oven", "over",
    "package", "paddle", "painter", "palace", "pancake", "panther", "paper", "parade", "parent",
    "party", "pasture", "peanut", "pencil", "people", "pepper", "perfect", "perhaps", "person",
    "pickle", "picture", "pillow", "pilot", "pirate", "pity", "planet", "plastic", "playground",
    "pleasant", "plenty", "pocket", "pocketbook", "police", "pony", "popcorn", "potato",
    "powder", "prepare", "present", "president", "pretty", "princess", "prison", "private",
    "problem", "program", "promise", "proper", "public", "pumpkin", "puppy", "purple", "puzzle",
    "question", "quickly", "quiet", "rabbit", "radio", "railroad", "rainbow", "rainy", "ready",
    "really", "reason", "record", "remember", "report", "rescue", "return", "ribbon", "riddle",
    "rifle", "river", "robber", "robin", "rocket", "rooster", "royal", "rubber", "ruler",
    "saddle", "safety", "sailor", "salad", "salmon", "sandwich", "scatter", "scissors",
    "season", "second", "secret", "service", "settle", "seven", "shadow", "shoulder", "shovel",
    "sidewalk", "signal", "silence", "silly", "silver", "simple", "single", "sister", "sixty",
    "skillet", "sleepy", "slipper", "slowly", "soldier", "somebody", "someone", "something",
    "sometimes", "somewhere", "sorry", "spider", "spinach", "spirit", "splendid", "squirrel",
    "stable", "station", "stocking", "stomach", "story", "student", "subject", "success",
    "sudden", "sugar", "summer", "sunshine", "supper", "suppose", "surprise", "sweater",
    "system", "table", "tablet", "tailor", "taking", "teacher", "teaspoon", "telephone",
    "television", "thirty", "thousand", "thunder", "ticket", "tiger", "tiny", "today",
    "together", "tomato", "tomorrow", "tonight", "towel", "tower", "tractor", "traffic",
    "travel", "treasure", "tulip", "tunnel", "turtle", "twenty", "umbrella", "uncle", "under",
    "uniform", "until", "upon", "upstairs", "useful", "vacation", "valley", "vegetable", "very",
    "village", "violet", "visit", "visitor", "wagon", "waiter", "wallpaper", "walnut", "water",
    "weather", "welcome", "western", "whatever", "whenever", "whisper", "whistle", "wicked",
    "wiggle", "willow", "window", "winter", "wisdom", "without", "wizard", "woman", "women",
    "wonder", "wooden", "woodpecker", "workman", "worry", "wrinkle", "yellow", "yesterday",
    "zebra",
];

pub static EASY_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FAMILIAR_WORDS.iter().copied().collect());

/// Whether a lowercase word is on the familiar-word list.
pub fn is_familiar(word: &str) -> bool {
    EASY_WORDS.contains(word)
}
