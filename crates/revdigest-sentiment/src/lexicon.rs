//! Gaming-domain word valences on a `[-4.0, 4.0]` scale.
//!
//! Entries follow the VADER valence conventions, extended with store-review
//! vocabulary ("unplayable", "pay-to-win", "rip-off"). Keys are lowercase and
//! may contain an internal hyphen or apostrophe.

use std::collections::HashMap;
use std::sync::LazyLock;

pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("acclaimed", 2.0),
    ("accomplished", 1.8),
    ("addictive", 1.5),
    ("admire", 2.1),
    ("admired", 2.1),
    ("adorable", 2.2),
    ("adore", 2.6),
    ("adored", 2.6),
    ("alive", 1.6),
    ("amazed", 2.2),
    ("amazing", 2.8),
    ("amazingly", 2.5),
    ("amusing", 1.6),
    ("appealing", 2.0),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("attractive", 1.9),
    ("awesome", 3.1),
    ("balanced", 1.2),
    ("beautiful", 2.9),
    ("beautifully", 2.7),
    ("beauty", 2.8),
    ("beloved", 2.3),
    ("best", 3.2),
    ("better", 1.9),
    ("blast", 1.8),
    ("bliss", 2.7),
    ("bonus", 2.5),
    ("bravo", 2.5),
    ("breathtaking", 2.8),
    ("brilliant", 2.8),
    ("brilliantly", 3.0),
    ("calm", 1.3),
    ("calming", 1.8),
    ("captivating", 2.3),
    ("care", 2.2),
    ("cared", 1.8),
    ("charm", 1.7),
    ("charming", 2.8),
    ("cheerful", 2.5),
    ("classic", 1.2),
    ("clever", 2.0),
    ("cleverly", 2.0),
    ("comfortable", 1.5),
    ("compelling", 1.7),
    ("competent", 1.3),
    ("confident", 2.2),
    ("congrats", 2.4),
    ("cool", 1.3),
    ("cozy", 1.9),
    ("creative", 1.9),
    ("cute", 2.0),
    ("delicious", 2.7),
    ("delight", 2.9),
    ("delighted", 2.3),
    ("delightful", 2.8),
    ("dream", 1.0),
    ("easy", 1.9),
    ("elegant", 2.1),
    ("engaging", 1.4),
    ("enjoy", 2.2),
    ("enjoyable", 1.9),
    ("enjoyed", 2.3),
    ("enjoying", 2.4),
    ("enjoys", 2.2),
    ("entertaining", 1.9),
    ("enthusiastic", 1.9),
    ("epic", 1.8),
    ("excellence", 3.1),
    ("excellent", 3.2),
    ("exceptional", 2.5),
    ("excited", 1.4),
    ("excitement", 2.2),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fair", 1.3),
    ("fantastic", 2.6),
    ("fantastically", 2.8),
    ("fascinating", 2.5),
    ("fave", 1.9),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("flawless", 2.3),
    ("fond", 1.9),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("funny", 1.9),
    ("gem", 2.0),
    ("generous", 2.3),
    ("genius", 1.9),
    ("glad", 2.0),
    ("glorious", 2.6),
    ("good", 1.9),
    ("goodness", 2.0),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("greatest", 3.2),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("hilarious", 1.7),
    ("hooked", 1.2),
    ("hope", 1.9),
    ("immersive", 1.8),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("incredible", 2.6),
    ("inspired", 2.2),
    ("inspiring", 2.2),
    ("interesting", 1.7),
    ("intuitive", 1.5),
    ("joy", 2.8),
    ("kudos", 2.3),
    ("laugh", 2.6),
    ("laughing", 2.2),
    ("legendary", 2.1),
    ("liked", 1.8),
    ("lively", 1.9),
    ("lovable", 3.0),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("magnificent", 2.9),
    ("marvelous", 2.9),
    ("masterful", 2.8),
    ("masterpiece", 3.0),
    ("memorable", 1.8),
    ("must-play", 2.0),
    ("neat", 2.0),
    ("nice", 1.8),
    ("nostalgic", 1.1),
    ("ok", 1.2),
    ("okay", 0.9),
    ("optimized", 1.1),
    ("outstanding", 3.0),
    ("passion", 2.0),
    ("passionate", 2.4),
    ("peaceful", 2.2),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("pleasing", 2.4),
    ("pleasure", 2.7),
    ("polished", 1.6),
    ("positive", 2.6),
    ("powerful", 1.8),
    ("praise", 2.6),
    ("pride", 1.4),
    ("proud", 2.1),
    ("recommend", 1.5),
    ("recommendable", 1.6),
    ("recommended", 1.6),
    ("refreshing", 1.8),
    ("relaxed", 2.2),
    ("relaxing", 1.9),
    ("reliable", 1.9),
    ("respect", 2.1),
    ("respectful", 2.0),
    ("rewarding", 2.0),
    ("rich", 2.6),
    ("safe", 1.9),
    ("satisfying", 2.0),
    ("smart", 1.7),
    ("smooth", 1.2),
    ("solid", 1.4),
    ("spectacular", 2.6),
    ("splendid", 2.6),
    ("stunning", 2.7),
    ("success", 2.7),
    ("successful", 2.8),
    ("superb", 3.1),
    ("supportive", 1.2),
    ("surprised", 0.9),
    ("sweet", 2.0),
    ("talented", 2.3),
    ("terrific", 3.2),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("thrilled", 2.7),
    ("thrilling", 2.1),
    ("top-notch", 2.5),
    ("treasure", 1.6),
    ("triumph", 2.2),
    ("trust", 2.3),
    ("underrated", 1.2),
    ("unique", 1.9),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("vibrant", 1.7),
    ("well-made", 2.0),
    ("win", 2.8),
    ("winner", 2.8),
    ("wins", 2.7),
    ("wonderful", 2.7),
    ("wonderfully", 2.9),
    ("worth", 0.9),
    ("worthwhile", 1.9),
    ("worthy", 1.9),
    ("wow", 2.8),
    ("yay", 2.4),
    ("yes", 1.7),
    // Negative signals
    ("abandoned", -1.9),
    ("abuse", -3.2),
    ("abysmal", -2.8),
    ("aggravating", -2.0),
    ("agony", -2.5),
    ("alone", -1.0),
    ("anger", -2.7),
    ("angered", -2.2),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("anxious", -1.0),
    ("ashamed", -2.1),
    ("atrocious", -2.8),
    ("avoid", -1.2),
    ("awful", -2.0),
    ("awfully", -1.7),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("badly", -2.1),
    ("bitter", -1.8),
    ("blame", -1.4),
    ("bland", -0.9),
    ("bleh", -1.8),
    ("bloated", -1.3),
    ("bore", -1.5),
    ("bored", -1.1),
    ("boring", -1.3),
    ("broken", -2.1),
    ("brutal", -3.1),
    ("bugged", -1.4),
    ("buggy", -1.6),
    ("bugs", -1.2),
    ("cash-grab", -2.2),
    ("cashgrab", -2.2),
    ("cheat", -1.4),
    ("cheaters", -1.8),
    ("cheating", -1.9),
    ("clumsy", -1.2),
    ("clunky", -1.3),
    ("complain", -1.5),
    ("complaint", -1.2),
    ("complaints", -1.7),
    ("confusing", -1.3),
    ("corrupt", -3.0),
    ("corrupted", -1.9),
    ("crap", -1.6),
    ("crappy", -2.5),
    ("crash", -1.7),
    ("crashed", -1.7),
    ("crashes", -1.7),
    ("crashing", -1.7),
    ("cringe", -1.8),
    ("cruel", -2.8),
    ("damaged", -1.9),
    ("dated", -0.8),
    ("dead", -1.6),
    ("defective", -1.9),
    ("depressing", -1.6),
    ("desperate", -1.3),
    ("destroyed", -2.6),
    ("disappoint", -1.7),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disappoints", -1.6),
    ("disaster", -3.1),
    ("disgrace", -2.4),
    ("disgusted", -2.4),
    ("disgusting", -2.4),
    ("dishonest", -2.7),
    ("dislike", -1.6),
    ("dreadful", -2.7),
    ("dull", -1.7),
    ("dumb", -2.3),
    ("embarrassing", -1.6),
    ("empty", -0.8),
    ("error", -1.7),
    ("errors", -1.4),
    ("evil", -3.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fails", -2.0),
    ("failure", -2.3),
    ("fake", -2.1),
    ("fault", -1.7),
    ("faulty", -1.4),
    ("fear", -2.2),
    ("flawed", -1.8),
    ("fraud", -2.8),
    ("freezes", -1.2),
    ("freezing", -1.1),
    ("frustrated", -2.4),
    ("frustrating", -1.9),
    ("frustration", -2.1),
    ("garbage", -2.2),
    ("glitch", -1.4),
    ("glitches", -1.4),
    ("glitchy", -1.6),
    ("greed", -1.7),
    ("greedy", -1.7),
    ("grind", -0.8),
    ("grindy", -1.0),
    ("gross", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("headache", -1.8),
    ("horrendous", -2.8),
    ("horrible", -2.5),
    ("horrid", -2.5),
    ("hurt", -2.4),
    ("ignored", -1.3),
    ("inferior", -1.7),
    ("infuriating", -2.5),
    ("insane", -1.7),
    ("insult", -2.2),
    ("irritating", -2.0),
    ("junk", -1.4),
    ("lacking", -1.0),
    ("lag", -1.1),
    ("lagging", -1.2),
    ("laggy", -1.4),
    ("lame", -1.8),
    ("lazy", -1.5),
    ("letdown", -1.8),
    ("lied", -1.6),
    ("lies", -1.8),
    ("loses", -1.3),
    ("losing", -1.6),
    ("lousy", -2.5),
    ("mad", -2.2),
    ("mediocre", -1.3),
    ("meh", -0.3),
    ("mess", -1.5),
    ("messy", -1.3),
    ("microtransactions", -0.9),
    ("miserable", -2.2),
    ("misleading", -1.7),
    ("nasty", -2.6),
    ("negative", -2.7),
    ("nightmare", -2.3),
    ("nonsense", -1.7),
    ("obnoxious", -2.0),
    ("offensive", -2.3),
    ("outdated", -1.2),
    ("overpriced", -1.6),
    ("overrated", -1.3),
    ("p2w", -2.0),
    ("pain", -2.3),
    ("painful", -1.9),
    ("painfully", -2.4),
    ("pathetic", -2.5),
    ("pay-to-win", -2.0),
    ("pity", -1.2),
    ("pointless", -1.7),
    ("poor", -2.1),
    ("poorly", -1.8),
    ("predatory", -2.0),
    ("problem", -1.7),
    ("problems", -1.7),
    ("punish", -2.4),
    ("rage", -2.6),
    ("refund", -1.0),
    ("refunded", -1.2),
    ("refunding", -1.2),
    ("regret", -1.8),
    ("regretful", -1.9),
    ("regrets", -1.7),
    ("regretted", -1.6),
    ("repetitive", -1.1),
    ("ridiculous", -1.5),
    ("rip-off", -2.1),
    ("ripoff", -2.1),
    ("rubbish", -1.6),
    ("ruin", -2.8),
    ("ruined", -2.4),
    ("ruins", -2.2),
    ("sad", -2.1),
    ("scam", -2.8),
    ("scammed", -2.7),
    ("scary", -2.2),
    ("shallow", -1.0),
    ("shame", -2.1),
    ("shit", -2.6),
    ("shitty", -3.2),
    ("sickening", -2.4),
    ("sloppy", -1.8),
    ("sluggish", -1.2),
    ("sorry", -0.3),
    ("stress", -1.8),
    ("stressful", -1.9),
    ("stuck", -1.0),
    ("stupid", -2.4),
    ("stuttering", -1.0),
    ("suck", -1.9),
    ("sucked", -2.0),
    ("sucks", -1.5),
    ("tedious", -1.8),
    ("terrible", -2.1),
    ("terribly", -2.1),
    ("threat", -2.4),
    ("tired", -1.9),
    ("toxic", -2.0),
    ("tragic", -3.4),
    ("trash", -1.8),
    ("trashy", -1.8),
    ("ugly", -2.3),
    ("unacceptable", -2.0),
    ("unbalanced", -1.3),
    ("unfair", -2.1),
    ("unfinished", -1.3),
    ("unfun", -1.8),
    ("unhappy", -1.8),
    ("uninstall", -1.5),
    ("uninstalled", -1.6),
    ("unoptimized", -1.5),
    ("unplayable", -2.6),
    ("unresponsive", -1.3),
    ("upset", -1.6),
    ("useless", -1.8),
    ("vile", -3.1),
    ("warning", -1.4),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("wasting", -1.7),
    ("weak", -1.9),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
    ("wrong", -2.1),
    ("wtf", -2.8),
];

static INDEX: LazyLock<HashMap<&'static str, f32>> =
    LazyLock::new(|| LEXICON.iter().copied().collect());

/// Valence of a normalized word, if the lexicon knows it.
pub(crate) fn valence(word: &str) -> Option<f32> {
    INDEX.get(word).copied()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn entries_are_unique_lowercase_and_in_range() {
        let mut seen = HashSet::new();
        for &(word, weight) in LEXICON {
            assert!(seen.insert(word), "duplicate entry {word}");
            assert_eq!(word, word.to_lowercase(), "{word} is not lowercase");
            assert!(weight != 0.0 && weight.abs() <= 4.0, "{word} = {weight}");
        }
    }

    #[test]
    fn covers_common_review_vocabulary() {
        for word in ["sucks", "ruined", "regret", "poorly", "abandoned", "avoid", "rip-off"] {
            assert!(valence(word).is_some_and(|v| v < 0.0), "{word}");
        }
        for word in ["blast", "gorgeous", "superb", "must-play"] {
            assert!(valence(word).is_some_and(|v| v > 0.0), "{word}");
        }
        assert_eq!(valence("controller"), None);
    }
}
