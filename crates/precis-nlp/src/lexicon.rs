//! English word lists backing the tagger and the lemmatizer
//!
//! Closed word classes are listed exhaustively. Open classes only list words
//! the suffix rules would get wrong or that are frequent enough to be worth
//! pinning down; everything else falls through to the heuristics in
//! [`crate::tagger`].

use precis_domain::PosTag;
use rustc_hash::{FxHashMap, FxHashSet};

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "every", "each", "some", "any", "no", "all", "both", "either", "neither",
    "another", "such",
];

/// Words that act as determiners before a nominal and as pronouns otherwise
const DEMONSTRATIVES: &[&str] = &["this", "that", "these", "those", "what", "which", "whose"];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves", "mine",
    "yours", "hers", "ours", "theirs", "my", "your", "his", "its", "our", "their", "who", "whom",
    "whoever", "whatever", "someone", "something", "somebody", "anyone", "anything", "anybody",
    "everyone", "everything", "everybody", "nobody", "nothing", "noone", "none", "oneself",
];

const POSSESSIVE_PRONOUNS: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down", "out",
    "off", "over", "under", "near", "across", "along", "among", "amongst", "around", "behind",
    "beneath", "beside", "beyond", "despite", "except", "inside", "outside", "onto", "upon",
    "via", "within", "without", "toward", "towards", "throughout", "per", "like", "unlike",
    "amid", "underneath", "thru",
];

const COORDINATING_CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "&", "plus"];

const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "because", "although", "though", "while", "if", "unless", "whereas", "whether", "since",
    "until", "as", "than", "whenever", "wherever",
];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "will", "would", "shall", "should", "may", "might", "must", "can", "could",
    "ca", "wo", "'m", "'re", "'ve", "'ll", "'d", "’m", "’re", "’ve", "’ll", "’d",
];

/// Auxiliaries after which an ambiguous word reads as a verb
const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "may", "might", "must", "can", "could", "ca", "wo", "'ll",
    "’ll", "'d", "’d",
];

const PARTICLES: &[&str] = &["not", "n't", "n’t", "'s", "’s"];

const INTERJECTIONS: &[&str] = &[
    "oh", "wow", "hello", "hi", "hey", "yes", "yeah", "ok", "okay", "alas", "oops", "ugh", "please",
    "thanks",
];

const ADVERBS: &[&str] = &[
    "very", "really", "quite", "too", "also", "just", "only", "still", "already", "even", "ever",
    "never", "always", "often", "sometimes", "usually", "seldom", "rarely", "here", "there",
    "now", "then", "today", "yesterday", "tomorrow", "tonight", "soon", "again", "almost",
    "however", "therefore", "thus", "perhaps", "maybe", "rather", "so", "well", "away", "back",
    "how", "when", "where", "why", "instead", "anyway", "otherwise", "nevertheless", "meanwhile",
    "later", "yet", "else", "indeed", "together", "abroad", "ahead", "apart", "further",
    "furthermore", "moreover", "once", "twice", "hence", "not", "somewhat", "anywhere",
    "everywhere", "nowhere", "somewhere", "forward", "forever", "often", "less", "least", "more",
    "most",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "dozen",
];

const ADJECTIVES: &[&str] = &[
    "good", "new", "first", "last", "long", "great", "little", "own", "other", "old", "right",
    "big", "high", "different", "small", "large", "next", "early", "young", "important", "few",
    "public", "bad", "same", "able", "late", "hard", "major", "free", "full", "special", "easy",
    "clear", "recent", "certain", "personal", "red", "blue", "green", "white", "black", "brown",
    "yellow", "gray", "grey", "dark", "strong", "possible", "whole", "short", "real", "local",
    "sure", "human", "true", "low", "happy", "simple", "available", "likely", "natural",
    "various", "nice", "fine", "quick", "slow", "lazy", "tired", "hot", "cold", "warm", "cool",
    "deep", "wide", "huge", "tiny", "rich", "poor", "pretty", "ugly", "safe", "main", "final",
    "current", "common", "similar", "serious", "single", "social", "political", "economic",
    "global", "modern", "ancient", "fresh", "complex", "basic", "quiet", "loud", "soft", "wild",
    "calm", "busy", "empty", "entire", "exact", "fair", "famous", "fast", "flat", "general",
    "honest", "ill", "kind", "loose", "mad", "narrow", "neat", "normal", "obvious", "odd",
    "perfect", "plain", "proper", "pure", "rapid", "rare", "raw", "ready", "rough", "sad",
    "sharp", "sick", "smart", "smooth", "solid", "sorry", "sweet", "tall", "thin", "thick",
    "tight", "tough", "weak", "wet", "wise", "wrong", "upset", "alive", "alone", "afraid",
    "aware", "many", "much", "several", "numerous", "second", "third", "fourth", "fifth",
    "daily", "friendly", "lovely", "lonely", "silly", "holy", "costly", "deadly", "elderly",
    "lively", "weekly", "monthly", "yearly", "open", "dry", "brave", "bright", "clean", "cheap",
    "close", "crazy", "dear", "dirty", "dull", "eager", "equal", "extra", "fat", "firm", "glad",
    "gentle", "heavy", "keen", "mild", "proud", "strange", "urgent", "vast", "vital",
    "visible", "wooden", "golden", "hidden", "broken", "frozen", "difficult", "online", "light",
];

/// Irregular comparative and superlative forms
const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("farther", "far"),
    ("farthest", "far"),
    ("elder", "old"),
    ("eldest", "old"),
];

/// Adjectives ending in -al/-ive/-ic that are usually nouns
const NOUNS: &[&str] = &[
    "animal", "signal", "capital", "hospital", "festival", "proposal", "arrival", "approval",
    "material", "journal", "terminal", "crystal", "metal", "pedal", "petal", "rival", "ritual",
    "canal", "interval", "portal", "tribunal", "rental", "referral", "withdrawal", "olive",
    "archive", "detective", "objective", "executive", "representative", "alternative",
    "initiative", "incentive", "motive", "native", "relative", "perspective", "music", "logic",
    "topic", "traffic", "public", "clinic", "critic", "fabric", "mechanic", "panic", "picnic",
    "republic", "rhetoric", "magic", "family", "assembly", "butterfly", "belly", "jelly", "ally",
    "rally", "anomaly", "monopoly", "july", "italy", "morning", "evening", "string", "spring",
    "ceiling", "wedding", "pudding", "thing", "king", "ring", "wing", "bed", "seed", "speed",
    "hundred", "shed", "sled", "creed", "greed", "breed", "weed", "reed", "news", "data",
    "user", "people", "time", "year", "way", "day", "man", "woman", "child", "world", "life",
    "hand", "part", "place", "case", "week", "company", "system", "program", "question",
    "government", "number", "night", "point", "home", "water", "light", "room", "mother", "area",
    "money", "story", "fact", "month", "lot", "book", "eye", "job", "word", "business",
    "issue", "side", "kind", "head", "house", "service", "friend", "father", "power", "hour",
    "game", "line", "end", "member", "law", "car", "city", "community", "name", "president",
    "team", "minute", "idea", "kid", "body", "information", "back", "parent", "face", "level",
    "office", "door", "health", "person", "art", "war", "history", "party", "result",
    "morning", "reason", "research", "girl", "guy", "moment", "air", "teacher", "force",
    "education", "dog", "cat", "fox",
];

/// Nouns whose plural and singular forms coincide, or that end in -s
const UNINFLECTED_NOUNS: &[&str] = &[
    "news", "series", "species", "means", "physics", "mathematics", "economics", "politics",
    "ethics", "athletics", "linguistics", "statistics", "lens", "gas", "bus", "chaos", "corps",
    "headquarters", "people", "sheep", "deer", "fish", "aircraft", "data",
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("oxen", "ox"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("diagnoses", "diagnosis"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("selves", "self"),
    ("loaves", "loaf"),
    ("calves", "calf"),
    ("buses", "bus"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("heroes", "hero"),
    ("echoes", "echo"),
    ("vetoes", "veto"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("appendices", "appendix"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("nuclei", "nucleus"),
    ("syllabi", "syllabus"),
    ("alumni", "alumnus"),
];

/// Nouns ending in -ie, whose plural must not become -y
const IE_NOUNS: &[&str] = &[
    "movie", "cookie", "pie", "tie", "lie", "calorie", "zombie", "rookie", "hippie", "selfie",
    "prairie", "genie", "brownie", "goalie", "sortie", "auntie", "birdie", "budgie", "hoodie",
    "smoothie", "veggie", "eerie",
];

/// Irregular verb forms mapped to their lemma
const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("am", "be"), ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("been", "be"),
    ("being", "be"), ("'m", "be"), ("’m", "be"), ("'re", "be"), ("’re", "be"),
    ("has", "have"), ("had", "have"), ("having", "have"), ("'ve", "have"), ("’ve", "have"),
    ("does", "do"), ("did", "do"), ("done", "do"), ("doing", "do"),
    ("'ll", "will"), ("’ll", "will"), ("wo", "will"), ("ca", "can"),
    ("'d", "would"), ("’d", "would"),
    ("arose", "arise"), ("arisen", "arise"), ("awoke", "awake"), ("awoken", "awake"),
    ("bore", "bear"), ("borne", "bear"), ("beaten", "beat"), ("became", "become"),
    ("began", "begin"), ("begun", "begin"), ("bent", "bend"), ("bound", "bind"),
    ("bit", "bite"), ("bitten", "bite"), ("bled", "bleed"), ("blew", "blow"), ("blown", "blow"),
    ("broke", "break"), ("broken", "break"), ("bred", "breed"), ("brought", "bring"),
    ("built", "build"), ("burnt", "burn"), ("bought", "buy"), ("caught", "catch"),
    ("chose", "choose"), ("chosen", "choose"), ("came", "come"), ("dealt", "deal"),
    ("dug", "dig"), ("drew", "draw"), ("drawn", "draw"), ("dreamt", "dream"),
    ("drank", "drink"), ("drunk", "drink"), ("drove", "drive"), ("driven", "drive"),
    ("ate", "eat"), ("eaten", "eat"), ("fell", "fall"), ("fallen", "fall"), ("fed", "feed"),
    ("felt", "feel"), ("fought", "fight"), ("found", "find"), ("fled", "flee"),
    ("flew", "fly"), ("flown", "fly"), ("forbade", "forbid"), ("forbidden", "forbid"),
    ("forgot", "forget"), ("forgotten", "forget"), ("forgave", "forgive"),
    ("forgiven", "forgive"), ("froze", "freeze"), ("got", "get"), ("gotten", "get"),
    ("gave", "give"), ("given", "give"), ("went", "go"), ("gone", "go"), ("goes", "go"),
    ("grew", "grow"), ("grown", "grow"), ("hung", "hang"), ("heard", "hear"), ("hid", "hide"),
    ("hidden", "hide"), ("held", "hold"), ("kept", "keep"), ("knew", "know"),
    ("known", "know"), ("laid", "lay"), ("led", "lead"), ("left", "leave"), ("lent", "lend"),
    ("lain", "lie"), ("lit", "light"), ("lost", "lose"), ("made", "make"), ("meant", "mean"),
    ("met", "meet"), ("paid", "pay"), ("proven", "prove"), ("rode", "ride"),
    ("ridden", "ride"), ("rang", "ring"), ("rung", "ring"), ("rose", "rise"), ("risen", "rise"),
    ("ran", "run"), ("said", "say"), ("says", "say"), ("saw", "see"), ("seen", "see"),
    ("sought", "seek"), ("sold", "sell"), ("sent", "send"), ("shook", "shake"),
    ("shaken", "shake"), ("shone", "shine"), ("shot", "shoot"), ("shown", "show"),
    ("sang", "sing"), ("sung", "sing"), ("sank", "sink"), ("sunk", "sink"), ("sat", "sit"),
    ("slept", "sleep"), ("slid", "slide"), ("spoke", "speak"), ("spoken", "speak"),
    ("spent", "spend"), ("spun", "spin"), ("stood", "stand"), ("stole", "steal"),
    ("stolen", "steal"), ("stuck", "stick"), ("stung", "sting"), ("struck", "strike"),
    ("swore", "swear"), ("sworn", "swear"), ("swept", "sweep"), ("swam", "swim"),
    ("swum", "swim"), ("swung", "swing"), ("took", "take"), ("taken", "take"),
    ("taught", "teach"), ("tore", "tear"), ("torn", "tear"), ("told", "tell"),
    ("thought", "think"), ("threw", "throw"), ("thrown", "throw"),
    ("understood", "understand"), ("woke", "wake"), ("woken", "wake"), ("wore", "wear"),
    ("worn", "wear"), ("won", "win"), ("wrote", "write"), ("written", "write"),
    ("withdrew", "withdraw"), ("withdrawn", "withdraw"), ("undertook", "undertake"),
    ("undertaken", "undertake"), ("overcame", "overcome"), ("ran", "run"),
];

/// Base forms of common verbs, irregular ones included
const BASE_VERBS: &[&str] = &[
    "accept", "achieve", "act", "add", "admit", "affect", "agree", "allow", "announce", "answer",
    "appear", "apply", "argue", "arise", "arrive", "ask", "assume", "attack", "attempt", "avoid",
    "awake", "bark", "base", "bear", "beat", "become", "begin", "believe", "belong", "bend",
    "bind", "bite", "bleed", "blow", "borrow", "break", "breed", "bring", "build", "burn", "buy",
    "call", "care", "carry", "catch", "cause", "change", "check", "choose", "claim", "clean",
    "climb", "collect", "combine", "come", "compare", "complain", "complete", "concern",
    "confirm", "connect", "consider", "contain", "continue", "control", "convert", "cook", "copy", "cost",
    "count", "cover", "crash", "create", "cross", "cry", "cut", "dance", "deal", "decide",
    "declare", "deliver", "demand", "deny", "depend", "describe", "design", "destroy",
    "determine", "develop", "die", "dig", "disappear", "discover", "discuss", "divide", "draw",
    "dream", "drink", "drive", "drop", "earn", "eat", "enable", "encourage", "enjoy", "ensure",
    "enter", "establish", "estimate", "examine", "exist", "expect", "explain", "explore",
    "express", "extend", "fail", "fall", "feed", "feel", "fight", "fill", "find", "finish",
    "fix", "flee", "fly", "focus", "follow", "forbid", "force", "forget", "forgive", "form",
    "freeze", "gain", "gather", "generate", "get", "give", "go", "grow", "handle", "hang",
    "happen", "hate", "hear", "help", "hide", "hit", "hold", "hope", "hurt", "identify",
    "ignore", "imagine", "improve", "include", "increase", "indicate", "influence", "inform",
    "intend", "introduce", "invest", "invite", "involve", "join", "jump", "keep", "kick",
    "kill", "kiss", "knock", "know", "laugh", "lay", "lead", "learn", "leave", "lend", "let",
    "lie", "light", "like", "limit", "link", "listen", "live", "look", "lose", "love",
    "maintain", "make", "manage", "marry", "matter", "mean", "measure", "meet", "mention",
    "miss", "move", "need", "notice", "observe", "obtain", "occur", "offer", "open", "order",
    "overcome", "pay", "perform", "pick", "plan", "play", "prefer", "prepare", "present",
    "prevent", "print", "produce", "promise", "protect", "prove", "provide", "publish", "pull",
    "push", "put", "quit", "raise", "reach", "read", "realize", "realise", "receive",
    "recognize", "record", "reduce", "refer", "reflect", "refuse", "relate", "release", "rely",
    "remain", "remember", "remove", "repeat", "replace", "reply", "report", "represent",
    "require", "respond", "return", "reveal", "ride", "ring", "rise", "roll", "run", "save",
    "say", "see", "seek", "seem", "select", "sell", "send", "separate", "serve", "set", "settle",
    "shake", "share", "shine", "shoot", "shout", "show", "shut", "sing", "sink", "sit", "sleep",
    "slide", "smile", "solve", "speak", "spend", "spin", "split", "spread", "stand", "start",
    "stay", "steal", "stick", "sting", "stop", "strike", "study", "succeed", "suffer",
    "suggest", "supply", "support", "suppose", "survive", "swear", "sweep", "swim", "swing",
    "take", "talk", "taste", "teach", "tear", "tell", "tend", "thank", "think", "throw", "touch",
    "train", "travel", "treat", "try", "turn", "understand", "undertake", "use", "visit", "vote",
    "wait", "wake", "walk", "want", "warn", "wash", "watch", "wear", "win", "wish", "withdraw",
    "wonder", "work", "worry", "write",
];

/// Stem endings after which a stripped `-ed`/`-ing` needs its `e` back
pub(crate) const E_RESTORING_ENDINGS: &[&str] = &[
    "at", "iz", "is", "us", "v", "c", "ng", "rg", "dg", "bl", "pl", "tl", "dl", "gl", "kl",
    "fl", "zl", "ur", "ir", "ar", "ys",
];

/// Word lists used by the tagger and the lemmatizer
///
/// Built once per process by [`Lexicon::english`].
#[derive(Debug, Clone)]
pub struct Lexicon {
    closed_class: FxHashMap<&'static str, PosTag>,
    demonstratives: FxHashSet<&'static str>,
    possessive_pronouns: FxHashSet<&'static str>,
    subject_pronouns: FxHashSet<&'static str>,
    modals: FxHashSet<&'static str>,
    number_words: FxHashSet<&'static str>,
    adverbs: FxHashSet<&'static str>,
    adjectives: FxHashSet<&'static str>,
    irregular_adjectives: FxHashMap<&'static str, &'static str>,
    nouns: FxHashSet<&'static str>,
    uninflected_nouns: FxHashSet<&'static str>,
    irregular_nouns: FxHashMap<&'static str, &'static str>,
    ie_nouns: FxHashSet<&'static str>,
    irregular_verbs: FxHashMap<&'static str, &'static str>,
    base_verbs: FxHashSet<&'static str>,
}

impl Lexicon {
    /// Build the English lexicon
    pub fn english() -> Self {
        let mut closed_class = FxHashMap::default();
        // Later inserts win: "her" is listed as a pronoun only, "not" ends up a particle
        let groups: [(&[&str], PosTag); 9] = [
            (ADVERBS, PosTag::Adverb),
            (INTERJECTIONS, PosTag::Interjection),
            (ADPOSITIONS, PosTag::Adposition),
            (SUBORDINATING_CONJUNCTIONS, PosTag::SubordinatingConjunction),
            (COORDINATING_CONJUNCTIONS, PosTag::CoordinatingConjunction),
            (DETERMINERS, PosTag::Determiner),
            (PRONOUNS, PosTag::Pronoun),
            (AUXILIARIES, PosTag::Auxiliary),
            (PARTICLES, PosTag::Particle),
        ];
        for (words, tag) in groups {
            for word in words {
                closed_class.insert(*word, tag);
            }
        }
        for word in DEMONSTRATIVES {
            closed_class.insert(*word, PosTag::Determiner);
        }

        let mut base_verbs: FxHashSet<&'static str> = BASE_VERBS.iter().copied().collect();
        base_verbs.extend(IRREGULAR_VERBS.iter().map(|(_, lemma)| *lemma));

        Self {
            closed_class,
            demonstratives: DEMONSTRATIVES.iter().copied().collect(),
            possessive_pronouns: POSSESSIVE_PRONOUNS.iter().copied().collect(),
            subject_pronouns: SUBJECT_PRONOUNS.iter().copied().collect(),
            modals: MODALS.iter().copied().collect(),
            number_words: NUMBER_WORDS.iter().copied().collect(),
            adverbs: ADVERBS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            irregular_adjectives: IRREGULAR_ADJECTIVES.iter().copied().collect(),
            nouns: NOUNS.iter().copied().collect(),
            uninflected_nouns: UNINFLECTED_NOUNS.iter().copied().collect(),
            irregular_nouns: IRREGULAR_NOUNS.iter().copied().collect(),
            ie_nouns: IE_NOUNS.iter().copied().collect(),
            irregular_verbs: IRREGULAR_VERBS.iter().copied().collect(),
            base_verbs,
        }
    }

    /// Tag of a closed-class word, if `lower` is one
    pub fn closed_class(&self, lower: &str) -> Option<PosTag> {
        self.closed_class.get(lower).copied()
    }

    /// this/that/these/those/what/which/whose
    pub fn is_demonstrative(&self, lower: &str) -> bool {
        self.demonstratives.contains(lower)
    }

    /// my/your/his/her/its/our/their
    pub fn is_possessive_pronoun(&self, lower: &str) -> bool {
        self.possessive_pronouns.contains(lower)
    }

    /// Personal pronouns that open a clause
    pub fn is_subject_pronoun(&self, lower: &str) -> bool {
        self.subject_pronouns.contains(lower)
    }

    /// Modal auxiliaries
    pub fn is_modal(&self, lower: &str) -> bool {
        self.modals.contains(lower)
    }

    /// Spelled-out cardinal numbers
    pub fn is_number_word(&self, lower: &str) -> bool {
        self.number_words.contains(lower)
    }

    /// Listed adverbs
    pub fn is_adverb(&self, lower: &str) -> bool {
        self.adverbs.contains(lower)
    }

    /// Listed adjectives (base forms)
    pub fn is_adjective(&self, lower: &str) -> bool {
        self.adjectives.contains(lower)
    }

    /// Lemma of an irregular comparative or superlative
    pub fn irregular_adjective(&self, lower: &str) -> Option<&'static str> {
        self.irregular_adjectives.get(lower).copied()
    }

    /// Listed nouns
    pub fn is_noun(&self, lower: &str) -> bool {
        self.nouns.contains(lower)
    }

    /// Nouns that are never singularized
    pub fn is_uninflected_noun(&self, lower: &str) -> bool {
        self.uninflected_nouns.contains(lower)
    }

    /// Singular of an irregular plural
    pub fn irregular_noun(&self, lower: &str) -> Option<&'static str> {
        self.irregular_nouns.get(lower).copied()
    }

    /// Nouns ending in -ie
    pub fn is_ie_noun(&self, lower: &str) -> bool {
        self.ie_nouns.contains(lower)
    }

    /// Lemma of an irregular verb form
    pub fn irregular_verb(&self, lower: &str) -> Option<&'static str> {
        self.irregular_verbs.get(lower).copied()
    }

    /// Listed verb base forms
    pub fn is_base_verb(&self, lower: &str) -> bool {
        self.base_verbs.contains(lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_class_lookup() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.closed_class("the"), Some(PosTag::Determiner));
        assert_eq!(lexicon.closed_class("they"), Some(PosTag::Pronoun));
        assert_eq!(lexicon.closed_class("and"), Some(PosTag::CoordinatingConjunction));
        assert_eq!(lexicon.closed_class("not"), Some(PosTag::Particle));
        assert_eq!(lexicon.closed_class("could"), Some(PosTag::Auxiliary));
        assert_eq!(lexicon.closed_class("fox"), None);
    }

    #[test]
    fn test_irregular_lemmas_are_base_verbs() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.irregular_verb("sat"), Some("sit"));
        assert!(lexicon.is_base_verb("sit"));
        assert!(lexicon.is_base_verb("be"));
    }
}
