//! Built-in linguistic tables.
//!
//! Phrases are lowercase and may carry accents; accent-folded spellings are
//! added when the tables are compiled into dictionaries.

use crate::options::AddressComponents;
use crate::resources::dictionary::{DictionaryEntry, EntryKind};

/// Canonical form followed by its abbreviations and alternative spellings.
type Group = &'static [(&'static str, &'static [&'static str])];

pub(crate) struct LanguageTables {
    pub language: &'static str,
    pub street_types: Group,
    pub directionals: Group,
    pub titles: Group,
    pub unit_designators: Group,
    pub descriptors: Group,
    pub toponyms: Group,
    pub stopwords: &'static [&'static str],
    pub ordinal_suffixes: &'static [&'static str],
    /// Spelled-out word and its digits
    pub numbers: &'static [(&'static str, &'static str)],
    /// Spelled-out ordinal and its numeric form
    pub ordinals: &'static [(&'static str, &'static str)],
    /// Extra words that only serve language identification
    pub lexicon: &'static [&'static str],
}

impl LanguageTables {
    /// Flatten every table into dictionary entries.
    pub fn entries(&self) -> Vec<DictionaryEntry> {
        let mut entries = Vec::new();
        let groups = [
            (self.street_types, EntryKind::StreetType, AddressComponents::STREET),
            (
                self.directionals,
                EntryKind::Directional,
                AddressComponents::STREET | AddressComponents::TOPONYM,
            ),
            (
                self.titles,
                EntryKind::Title,
                AddressComponents::STREET | AddressComponents::TOPONYM | AddressComponents::NAME,
            ),
            (
                self.unit_designators,
                EntryKind::UnitDesignator,
                AddressComponents::UNIT
                    | AddressComponents::LEVEL
                    | AddressComponents::STAIRCASE
                    | AddressComponents::ENTRANCE
                    | AddressComponents::PO_BOX,
            ),
            (
                self.descriptors,
                EntryKind::Descriptor,
                AddressComponents::NAME | AddressComponents::CATEGORY,
            ),
            (self.toponyms, EntryKind::Toponym, AddressComponents::TOPONYM),
        ];

        for (group, kind, components) in groups {
            for &(canonical, alternatives) in group {
                entries.push(DictionaryEntry::new(canonical, canonical, kind, components));
                for &phrase in alternatives {
                    entries.push(DictionaryEntry::new(phrase, canonical, kind, components));
                }
            }
        }
        for &word in self.stopwords {
            entries.push(DictionaryEntry::new(
                word,
                word,
                EntryKind::Stopword,
                AddressComponents::ANY,
            ));
        }
        for &suffix in self.ordinal_suffixes {
            entries.push(DictionaryEntry::new(
                suffix,
                suffix,
                EntryKind::OrdinalSuffix,
                AddressComponents::ANY,
            ));
        }
        for &(word, digits) in self.numbers {
            entries.push(DictionaryEntry::new(
                word,
                digits,
                EntryKind::Number,
                AddressComponents::ANY,
            ));
        }
        for &(word, numeric) in self.ordinals {
            entries.push(DictionaryEntry::new(
                word,
                numeric,
                EntryKind::Ordinal,
                AddressComponents::ANY,
            ));
        }
        entries
    }
}

/// A country name table row.
pub(crate) struct CountryRow {
    pub names: &'static [&'static str],
    pub languages: &'static [&'static str],
}

pub(crate) const LANGUAGES: &[LanguageTables] = &[ENGLISH, FRENCH, GERMAN, SPANISH, ITALIAN, DUTCH, PORTUGUESE];

const ENGLISH: LanguageTables = LanguageTables {
    language: "en",
    street_types: &[
        ("street", &["st", "str"]),
        ("avenue", &["ave", "av", "avn"]),
        ("road", &["rd"]),
        ("boulevard", &["blvd", "boul"]),
        ("drive", &["dr", "drv"]),
        ("lane", &["ln"]),
        ("court", &["ct"]),
        ("place", &["pl"]),
        ("terrace", &["ter", "terr"]),
        ("highway", &["hwy"]),
        ("parkway", &["pkwy"]),
        ("square", &["sq"]),
        ("circle", &["cir"]),
        ("way", &["wy"]),
        ("trail", &["trl"]),
        ("alley", &["aly"]),
        ("crescent", &["cres"]),
        ("expressway", &["expy"]),
        ("freeway", &["fwy"]),
        ("plaza", &["plz"]),
        ("route", &["rte"]),
    ],
    directionals: &[
        ("north", &["n"]),
        ("south", &["s"]),
        ("east", &["e"]),
        ("west", &["w"]),
        ("northeast", &["ne"]),
        ("northwest", &["nw"]),
        ("southeast", &["se"]),
        ("southwest", &["sw"]),
    ],
    titles: &[
        ("saint", &["st"]),
        ("mount", &["mt"]),
        ("fort", &["ft"]),
        ("doctor", &["dr"]),
    ],
    unit_designators: &[
        ("apartment", &["apt"]),
        ("suite", &["ste"]),
        ("unit", &[]),
        ("floor", &["fl"]),
        ("room", &["rm"]),
        ("building", &["bldg"]),
        ("level", &["lvl"]),
        ("number", &["no"]),
    ],
    descriptors: &[
        ("park", &["pk"]),
        ("restaurant", &[]),
        ("cafe", &[]),
        ("hotel", &[]),
        ("center", &["ctr"]),
        ("centre", &[]),
        ("market", &["mkt"]),
        ("mall", &[]),
        ("store", &[]),
        ("shop", &[]),
        ("bar", &[]),
        ("pub", &[]),
        ("inn", &[]),
        ("museum", &[]),
        ("library", &[]),
        ("company", &["co"]),
        ("incorporated", &["inc"]),
        ("limited", &["ltd"]),
        ("corporation", &["corp"]),
    ],
    toponyms: &[("new york", &["nyc"]), ("los angeles", &[]), ("united states", &["usa"])],
    stopwords: &["the", "of", "and", "at", "in", "on", "by", "for", "a", "an"],
    ordinal_suffixes: &["st", "nd", "rd", "th"],
    numbers: &[
        ("zero", "0"), ("one", "1"), ("two", "2"), ("three", "3"), ("four", "4"),
        ("five", "5"), ("six", "6"), ("seven", "7"), ("eight", "8"), ("nine", "9"),
        ("ten", "10"), ("eleven", "11"), ("twelve", "12"), ("thirteen", "13"),
        ("fourteen", "14"), ("fifteen", "15"), ("sixteen", "16"), ("seventeen", "17"),
        ("eighteen", "18"), ("nineteen", "19"), ("twenty", "20"), ("thirty", "30"),
        ("forty", "40"), ("fifty", "50"), ("sixty", "60"), ("seventy", "70"),
        ("eighty", "80"), ("ninety", "90"), ("hundred", "100"),
    ],
    ordinals: &[
        ("first", "1st"), ("second", "2nd"), ("third", "3rd"), ("fourth", "4th"),
        ("fifth", "5th"), ("sixth", "6th"), ("seventh", "7th"), ("eighth", "8th"),
        ("ninth", "9th"), ("tenth", "10th"), ("eleventh", "11th"), ("twelfth", "12th"),
        ("thirteenth", "13th"), ("fourteenth", "14th"), ("fifteenth", "15th"),
        ("sixteenth", "16th"), ("seventeenth", "17th"), ("eighteenth", "18th"),
        ("nineteenth", "19th"), ("twentieth", "20th"), ("thirtieth", "30th"),
        ("fortieth", "40th"), ("fiftieth", "50th"), ("sixtieth", "60th"),
        ("seventieth", "70th"), ("eightieth", "80th"), ("ninetieth", "90th"),
        ("hundredth", "100th"),
    ],
    lexicon: &["new", "city", "county", "town", "village", "main", "bridge", "hill", "church"],
};

const FRENCH: LanguageTables = LanguageTables {
    language: "fr",
    street_types: &[
        ("rue", &["r"]),
        ("avenue", &["av", "ave"]),
        ("boulevard", &["bd", "boul", "bld"]),
        ("place", &["pl"]),
        ("chemin", &["ch", "chem"]),
        ("impasse", &["imp"]),
        ("allée", &["all"]),
        ("quai", &[]),
        ("route", &["rte"]),
        ("cours", &["crs"]),
        ("square", &["sq"]),
        ("passage", &["pass"]),
        ("faubourg", &["fbg"]),
    ],
    directionals: &[("nord", &[]), ("sud", &[]), ("est", &[]), ("ouest", &[])],
    titles: &[("saint", &["st"]), ("sainte", &["ste"])],
    unit_designators: &[
        ("appartement", &["appt", "app"]),
        ("étage", &["et"]),
        ("bâtiment", &["bat"]),
        ("escalier", &["esc"]),
        ("porte", &[]),
    ],
    descriptors: &[
        ("parc", &[]),
        ("café", &[]),
        ("restaurant", &[]),
        ("hôtel", &[]),
        ("gare", &[]),
        ("marché", &[]),
        ("boulangerie", &[]),
    ],
    toponyms: &[],
    stopwords: &[
        "le", "la", "les", "l'", "de", "du", "des", "d'", "au", "aux", "et", "à", "en", "sur",
    ],
    ordinal_suffixes: &["e", "er", "re", "ème", "eme"],
    numbers: &[
        ("zéro", "0"), ("un", "1"), ("deux", "2"), ("trois", "3"), ("quatre", "4"),
        ("cinq", "5"), ("six", "6"), ("sept", "7"), ("huit", "8"), ("neuf", "9"),
        ("dix", "10"), ("onze", "11"), ("douze", "12"), ("treize", "13"),
        ("quatorze", "14"), ("quinze", "15"), ("seize", "16"), ("vingt", "20"),
        ("trente", "30"), ("quarante", "40"), ("cinquante", "50"), ("soixante", "60"),
        ("cent", "100"),
    ],
    ordinals: &[
        ("premier", "1er"), ("première", "1re"), ("deuxième", "2e"), ("second", "2e"),
        ("troisième", "3e"), ("quatrième", "4e"), ("cinquième", "5e"), ("sixième", "6e"),
        ("septième", "7e"), ("huitième", "8e"), ("neuvième", "9e"), ("dixième", "10e"),
    ],
    lexicon: &["paris", "bruxelles", "lyon", "marseille", "loi", "paix", "ville", "pont", "église"],
};

const GERMAN: LanguageTables = LanguageTables {
    language: "de",
    street_types: &[
        ("straße", &["str", "strasse"]),
        ("weg", &[]),
        ("gasse", &[]),
        ("platz", &["pl"]),
        ("allee", &[]),
        ("ring", &[]),
        ("damm", &[]),
        ("ufer", &[]),
        ("chaussee", &[]),
    ],
    directionals: &[("nord", &[]), ("süd", &[]), ("ost", &[]), ("west", &[])],
    titles: &[("sankt", &["st"])],
    unit_designators: &[
        ("wohnung", &["whg"]),
        ("etage", &[]),
        ("stock", &[]),
        ("gebäude", &["geb"]),
    ],
    descriptors: &[
        ("park", &[]),
        ("restaurant", &[]),
        ("hotel", &[]),
        ("bahnhof", &["bhf"]),
        ("markt", &[]),
        ("gasthaus", &[]),
    ],
    toponyms: &[],
    stopwords: &[
        "der", "die", "das", "den", "dem", "des", "und", "am", "an", "im", "in", "zum", "zur",
        "von",
    ],
    ordinal_suffixes: &[],
    numbers: &[
        ("null", "0"), ("eins", "1"), ("zwei", "2"), ("drei", "3"), ("vier", "4"),
        ("fünf", "5"), ("sechs", "6"), ("sieben", "7"), ("acht", "8"), ("neun", "9"),
        ("zehn", "10"), ("elf", "11"), ("zwölf", "12"), ("zwanzig", "20"),
        ("hundert", "100"),
    ],
    ordinals: &[],
    lexicon: &["berlin", "münchen", "hamburg", "köln", "unter", "linden", "haus", "brücke"],
};

const SPANISH: LanguageTables = LanguageTables {
    language: "es",
    street_types: &[
        ("calle", &["c", "cl"]),
        ("avenida", &["av", "avda"]),
        ("carrera", &["cra", "kr"]),
        ("paseo", &["po"]),
        ("plaza", &["pl", "pza"]),
        ("camino", &["cno"]),
        ("carretera", &["ctra"]),
        ("ronda", &["rda"]),
        ("travesía", &["trav"]),
    ],
    directionals: &[("norte", &[]), ("sur", &[]), ("este", &[]), ("oeste", &[])],
    titles: &[("san", &[]), ("santa", &["sta"]), ("santo", &["sto"])],
    unit_designators: &[
        ("piso", &[]),
        ("puerta", &["pta"]),
        ("departamento", &["depto", "dpto"]),
        ("apartamento", &["apto"]),
    ],
    descriptors: &[
        ("parque", &[]),
        ("restaurante", &[]),
        ("hotel", &[]),
        ("mercado", &[]),
    ],
    toponyms: &[],
    stopwords: &["el", "la", "los", "las", "de", "del", "y"],
    ordinal_suffixes: &["º", "ª", "o", "a"],
    numbers: &[
        ("cero", "0"), ("uno", "1"), ("dos", "2"), ("tres", "3"), ("cuatro", "4"),
        ("cinco", "5"), ("seis", "6"), ("siete", "7"), ("ocho", "8"), ("nueve", "9"),
        ("diez", "10"),
    ],
    ordinals: &[
        ("primero", "1º"), ("primera", "1ª"), ("segundo", "2º"), ("tercero", "3º"),
        ("cuarto", "4º"), ("quinto", "5º"),
    ],
    lexicon: &["madrid", "barcelona", "sevilla", "ciudad", "mayor"],
};

const ITALIAN: LanguageTables = LanguageTables {
    language: "it",
    street_types: &[
        ("via", &["v"]),
        ("viale", &["vle"]),
        ("piazza", &["pza", "pzza"]),
        ("corso", &["cso"]),
        ("largo", &[]),
        ("vicolo", &["vic"]),
        ("strada", &["str"]),
        ("lungomare", &[]),
    ],
    directionals: &[("nord", &[]), ("sud", &[]), ("est", &[]), ("ovest", &[])],
    titles: &[("san", &[]), ("santa", &[]), ("santo", &[]), ("sant'", &[])],
    unit_designators: &[("interno", &["int"]), ("piano", &[]), ("scala", &["sc"])],
    descriptors: &[
        ("parco", &[]),
        ("ristorante", &[]),
        ("albergo", &[]),
        ("hotel", &[]),
        ("mercato", &[]),
    ],
    toponyms: &[],
    stopwords: &["il", "lo", "la", "i", "gli", "le", "di", "del", "della", "dei", "delle", "e"],
    ordinal_suffixes: &["º", "ª", "o", "a"],
    numbers: &[
        ("uno", "1"), ("due", "2"), ("tre", "3"), ("quattro", "4"), ("cinque", "5"),
        ("sei", "6"), ("sette", "7"), ("otto", "8"), ("nove", "9"), ("dieci", "10"),
    ],
    ordinals: &[],
    lexicon: &["roma", "milano", "napoli", "torino", "firenze", "venezia"],
};

const DUTCH: LanguageTables = LanguageTables {
    language: "nl",
    street_types: &[
        ("straat", &["str"]),
        ("laan", &["ln"]),
        ("weg", &[]),
        ("plein", &["pln"]),
        ("gracht", &["gr"]),
        ("kade", &[]),
        ("singel", &[]),
        ("dijk", &[]),
    ],
    directionals: &[("noord", &[]), ("zuid", &[]), ("oost", &[]), ("west", &[])],
    titles: &[("sint", &["st"])],
    unit_designators: &[("verdieping", &[]), ("bus", &[])],
    descriptors: &[
        ("park", &[]),
        ("restaurant", &[]),
        ("hotel", &[]),
        ("markt", &[]),
    ],
    toponyms: &[],
    stopwords: &["de", "het", "een", "van", "en", "der", "den", "op", "aan"],
    ordinal_suffixes: &["e", "ste", "de"],
    numbers: &[
        ("nul", "0"), ("twee", "2"), ("drie", "3"), ("vier", "4"), ("vijf", "5"),
        ("zes", "6"), ("zeven", "7"), ("acht", "8"), ("negen", "9"), ("tien", "10"),
    ],
    ordinals: &[],
    lexicon: &["amsterdam", "rotterdam", "brussel", "antwerpen", "gent"],
};

const PORTUGUESE: LanguageTables = LanguageTables {
    language: "pt",
    street_types: &[
        ("rua", &["r"]),
        ("avenida", &["av"]),
        ("travessa", &["tv", "trav"]),
        ("praça", &["pc", "pca"]),
        ("largo", &["lgo"]),
        ("estrada", &["estr"]),
        ("alameda", &["al"]),
        ("rodovia", &["rod"]),
    ],
    directionals: &[("norte", &[]), ("sul", &[]), ("leste", &[]), ("oeste", &[])],
    titles: &[("são", &[]), ("santa", &["sta"]), ("santo", &["sto"])],
    unit_designators: &[
        ("apartamento", &["apto", "ap"]),
        ("andar", &[]),
        ("bloco", &["bl"]),
        ("sala", &[]),
    ],
    descriptors: &[
        ("parque", &[]),
        ("restaurante", &[]),
        ("hotel", &[]),
        ("mercado", &[]),
    ],
    toponyms: &[],
    stopwords: &["o", "a", "os", "as", "de", "da", "do", "das", "dos", "e"],
    ordinal_suffixes: &["º", "ª", "o", "a"],
    numbers: &[
        ("um", "1"), ("dois", "2"), ("três", "3"), ("quatro", "4"), ("cinco", "5"),
        ("seis", "6"), ("sete", "7"), ("oito", "8"), ("nove", "9"), ("dez", "10"),
    ],
    ordinals: &[],
    lexicon: &["lisboa", "porto", "são paulo", "rio"],
};

/// Country names (English and native) with the languages spoken there.
pub(crate) const COUNTRIES: &[CountryRow] = &[
    CountryRow {
        names: &["united states", "united states of america", "usa", "us", "america"],
        languages: &["en"],
    },
    CountryRow {
        names: &["united kingdom", "uk", "great britain", "england", "scotland", "wales"],
        languages: &["en"],
    },
    CountryRow { names: &["ireland", "australia", "new zealand"], languages: &["en"] },
    CountryRow { names: &["canada"], languages: &["en", "fr"] },
    CountryRow { names: &["france", "république française"], languages: &["fr"] },
    CountryRow { names: &["germany", "deutschland"], languages: &["de"] },
    CountryRow { names: &["austria", "österreich"], languages: &["de"] },
    CountryRow {
        names: &["switzerland", "schweiz", "suisse", "svizzera"],
        languages: &["de", "fr", "it"],
    },
    CountryRow {
        names: &["belgium", "belgique", "belgië", "belgien"],
        languages: &["nl", "fr", "de"],
    },
    CountryRow { names: &["luxembourg", "luxemburg"], languages: &["fr", "de"] },
    CountryRow { names: &["netherlands", "nederland", "holland"], languages: &["nl"] },
    CountryRow {
        names: &["spain", "españa", "mexico", "méxico", "argentina", "colombia", "chile", "peru", "perú"],
        languages: &["es"],
    },
    CountryRow { names: &["italy", "italia"], languages: &["it"] },
    CountryRow { names: &["portugal", "brazil", "brasil"], languages: &["pt"] },
    CountryRow { names: &["japan", "日本", "nippon", "にっぽん", "にほん"], languages: &["ja"] },
    CountryRow {
        names: &["china", "中国", "中華人民共和国", "中华人民共和国", "taiwan", "台灣", "臺灣", "台湾"],
        languages: &["zh"],
    },
    CountryRow { names: &["hong kong", "香港"], languages: &["zh", "en"] },
    CountryRow {
        names: &["south korea", "korea", "대한민국", "한국"],
        languages: &["ko"],
    },
    CountryRow {
        names: &["russia", "россия", "российская федерация"],
        languages: &["ru"],
    },
    CountryRow { names: &["ukraine", "україна"], languages: &["uk"] },
    CountryRow { names: &["greece", "ελλάδα"], languages: &["el"] },
    CountryRow { names: &["israel", "ישראל"], languages: &["he"] },
    CountryRow { names: &["egypt", "مصر", "saudi arabia"], languages: &["ar"] },
    CountryRow { names: &["thailand", "ประเทศไทย"], languages: &["th"] },
    CountryRow { names: &["india", "भारत"], languages: &["hi", "en"] },
    CountryRow { names: &["armenia", "հայաստան"], languages: &["hy"] },
];
