// ============================================
// src/grammar.rs
// 性・動詞の活用・前置詞 (列挙型で網羅的に扱う)
// ============================================

/// 名詞の性
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    /// 単数の定冠詞
    pub fn definite(self) -> &'static str {
        match self {
            Gender::Masculine => "el",
            Gender::Feminine => "la",
        }
    }

    pub fn definite_plural(self) -> &'static str {
        match self {
            Gender::Masculine => "los",
            Gender::Feminine => "las",
        }
    }

    pub fn indefinite(self) -> &'static str {
        match self {
            Gender::Masculine => "un",
            Gender::Feminine => "una",
        }
    }

    pub fn indefinite_plural(self) -> &'static str {
        match self {
            Gender::Masculine => "unos",
            Gender::Feminine => "unas",
        }
    }
}

/// 活用表で扱う動詞
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Ser,
    Estar,
    Tener,
    Ir,
    Hablar,
    Comer,
}

/// 人称
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    Yo,
    Tu,
    El,
    Nosotros,
    Vosotros,
    Ellos,
}

impl Verb {
    pub const ALL: [Verb; 6] = [
        Verb::Ser,
        Verb::Estar,
        Verb::Tener,
        Verb::Ir,
        Verb::Hablar,
        Verb::Comer,
    ];

    pub fn infinitive(self) -> &'static str {
        match self {
            Verb::Ser => "ser",
            Verb::Estar => "estar",
            Verb::Tener => "tener",
            Verb::Ir => "ir",
            Verb::Hablar => "hablar",
            Verb::Comer => "comer",
        }
    }

    /// 直説法現在
    pub fn conjugate(self, person: Person) -> &'static str {
        use Person::*;
        match (self, person) {
            (Verb::Ser, Yo) => "soy",
            (Verb::Ser, Tu) => "eres",
            (Verb::Ser, El) => "es",
            (Verb::Ser, Nosotros) => "somos",
            (Verb::Ser, Vosotros) => "sois",
            (Verb::Ser, Ellos) => "son",

            (Verb::Estar, Yo) => "estoy",
            (Verb::Estar, Tu) => "estás",
            (Verb::Estar, El) => "está",
            (Verb::Estar, Nosotros) => "estamos",
            (Verb::Estar, Vosotros) => "estáis",
            (Verb::Estar, Ellos) => "están",

            (Verb::Tener, Yo) => "tengo",
            (Verb::Tener, Tu) => "tienes",
            (Verb::Tener, El) => "tiene",
            (Verb::Tener, Nosotros) => "tenemos",
            (Verb::Tener, Vosotros) => "tenéis",
            (Verb::Tener, Ellos) => "tienen",

            (Verb::Ir, Yo) => "voy",
            (Verb::Ir, Tu) => "vas",
            (Verb::Ir, El) => "va",
            (Verb::Ir, Nosotros) => "vamos",
            (Verb::Ir, Vosotros) => "vais",
            (Verb::Ir, Ellos) => "van",

            (Verb::Hablar, Yo) => "hablo",
            (Verb::Hablar, Tu) => "hablas",
            (Verb::Hablar, El) => "habla",
            (Verb::Hablar, Nosotros) => "hablamos",
            (Verb::Hablar, Vosotros) => "habláis",
            (Verb::Hablar, Ellos) => "hablan",

            (Verb::Comer, Yo) => "como",
            (Verb::Comer, Tu) => "comes",
            (Verb::Comer, El) => "come",
            (Verb::Comer, Nosotros) => "comemos",
            (Verb::Comer, Vosotros) => "coméis",
            (Verb::Comer, Ellos) => "comen",
        }
    }

    /// 表示用 ("Ser")
    pub fn label(self) -> String {
        let inf = self.infinitive();
        let mut chars = inf.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&v| v == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|&v| v == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::Yo,
        Person::Tu,
        Person::El,
        Person::Nosotros,
        Person::Vosotros,
        Person::Ellos,
    ];

    /// 表の左列に出す代名詞
    pub fn pronoun(self) -> &'static str {
        match self {
            Person::Yo => "Yo",
            Person::Tu => "Tú",
            Person::El => "Él/Ella/Usted",
            Person::Nosotros => "Nosotros/as",
            Person::Vosotros => "Vosotros/as",
            Person::Ellos => "Ellos/as/Ustedes",
        }
    }
}

/// por / para
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preposition {
    Por,
    Para,
}

impl Preposition {
    pub fn as_str(self) -> &'static str {
        match self {
            Preposition::Por => "por",
            Preposition::Para => "para",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjugation_spot_checks() {
        assert_eq!(Verb::Ser.conjugate(Person::Yo), "soy");
        assert_eq!(Verb::Estar.conjugate(Person::Tu), "estás");
        assert_eq!(Verb::Tener.conjugate(Person::Vosotros), "tenéis");
        assert_eq!(Verb::Ir.conjugate(Person::Nosotros), "vamos");
        assert_eq!(Verb::Hablar.conjugate(Person::Ellos), "hablan");
        assert_eq!(Verb::Comer.conjugate(Person::El), "come");
    }

    #[test]
    fn verb_cycle() {
        assert_eq!(Verb::Comer.next(), Verb::Ser);
        assert_eq!(Verb::Ser.prev(), Verb::Comer);
        assert_eq!(Verb::Hablar.label(), "Hablar");
    }

    #[test]
    fn articles_by_gender() {
        assert_eq!(Gender::Feminine.definite(), "la");
        assert_eq!(Gender::Masculine.indefinite_plural(), "unos");
    }
}
