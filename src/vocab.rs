/*
 * src/vocab.rs
 * 各トピックの語彙・問題データ
 */

use crate::grammar::{Gender, Preposition};

/// スペイン語と英語の組 (表示用の表)
#[derive(Copy, Clone, Debug)]
pub struct Phrase {
    pub spanish: &'static str,
    pub english: &'static str,
}

pub const GREETINGS: &'static [Phrase] = &[
    Phrase { spanish: "Hola", english: "Hello" },
    Phrase { spanish: "Buenos días", english: "Good morning" },
    Phrase { spanish: "Buenas tardes", english: "Good afternoon" },
    Phrase { spanish: "Buenas noches", english: "Good evening / Good night" },
    Phrase { spanish: "¿Cómo estás?", english: "How are you? (informal)" },
    Phrase { spanish: "¿Cómo está usted?", english: "How are you? (formal)" },
    Phrase { spanish: "Estoy bien, gracias.", english: "I'm fine, thank you." },
    Phrase { spanish: "Mucho gusto", english: "Nice to meet you" },
    Phrase { spanish: "Adiós", english: "Goodbye" },
    Phrase { spanish: "Hasta luego", english: "See you later" },
];

pub const QUESTION_WORDS: &'static [Phrase] = &[
    Phrase { spanish: "¿Qué?", english: "What?" },
    Phrase { spanish: "¿Quién(es)?", english: "Who?" },
    Phrase { spanish: "¿Cuándo?", english: "When?" },
    Phrase { spanish: "¿Dónde?", english: "Where?" },
    Phrase { spanish: "¿Por qué?", english: "Why?" },
    Phrase { spanish: "¿Cómo?", english: "How?" },
    Phrase { spanish: "¿Cuál(es)?", english: "Which?" },
    Phrase { spanish: "¿Cuánto/a(s)?", english: "How much / many?" },
];

/// フラッシュカード (表: 英語, 裏: スペイン語)
#[derive(Copy, Clone, Debug)]
pub struct Flashcard {
    pub front: &'static str,
    pub back: &'static str,
}

/// 曜日 → 月 → 季節の順
pub const FLASHCARDS: &'static [Flashcard] = &[
    Flashcard { front: "Monday", back: "lunes" },
    Flashcard { front: "Tuesday", back: "martes" },
    Flashcard { front: "Wednesday", back: "miércoles" },
    Flashcard { front: "Thursday", back: "jueves" },
    Flashcard { front: "Friday", back: "viernes" },
    Flashcard { front: "Saturday", back: "sábado" },
    Flashcard { front: "Sunday", back: "domingo" },
    Flashcard { front: "January", back: "enero" },
    Flashcard { front: "February", back: "febrero" },
    Flashcard { front: "March", back: "marzo" },
    Flashcard { front: "April", back: "abril" },
    Flashcard { front: "May", back: "mayo" },
    Flashcard { front: "June", back: "junio" },
    Flashcard { front: "July", back: "julio" },
    Flashcard { front: "August", back: "agosto" },
    Flashcard { front: "September", back: "septiembre" },
    Flashcard { front: "October", back: "octubre" },
    Flashcard { front: "November", back: "noviembre" },
    Flashcard { front: "December", back: "diciembre" },
    Flashcard { front: "Spring", back: "la primavera" },
    Flashcard { front: "Summer", back: "el verano" },
    Flashcard { front: "Autumn", back: "el otoño" },
    Flashcard { front: "Winter", back: "el invierno" },
];

/// 性クイズの単語
#[derive(Copy, Clone, Debug)]
pub struct GenderWord {
    pub word: &'static str,
    pub gender: Gender,
}

pub const GENDER_WORDS: &'static [GenderWord] = &[
    GenderWord { word: "libro", gender: Gender::Masculine },
    GenderWord { word: "casa", gender: Gender::Feminine },
    GenderWord { word: "problema", gender: Gender::Masculine },
    GenderWord { word: "ciudad", gender: Gender::Feminine },
    GenderWord { word: "mapa", gender: Gender::Masculine },
    GenderWord { word: "mano", gender: Gender::Feminine },
    GenderWord { word: "canción", gender: Gender::Feminine },
    GenderWord { word: "día", gender: Gender::Masculine },
    GenderWord { word: "luz", gender: Gender::Feminine },
];

/// 選択肢つきの穴埋め文 (指示詞クイズ)
#[derive(Copy, Clone, Debug)]
pub struct FillIn {
    pub sentence: &'static str,
    pub options: &'static [&'static str],
    pub answer: &'static str,
}

pub const DEMONSTRATIVES: &'static [FillIn] = &[
    FillIn { sentence: "Quiero ___ libro aquí.", options: &["este", "ese", "aquel"], answer: "este" },
    FillIn { sentence: "¿Ves ___ pájaro allí?", options: &["este", "ese", "aquel"], answer: "aquel" },
    FillIn { sentence: "Pásame ___ silla ahí.", options: &["esta", "esa", "aquella"], answer: "esa" },
    FillIn { sentence: "Me gustan ___ zapatos aquí.", options: &["estos", "esos", "aquellos"], answer: "estos" },
];

/// 国籍 (男性形・女性形)
#[derive(Copy, Clone, Debug)]
pub struct Nationality {
    pub country: &'static str,
    pub masculine: &'static str,
    pub feminine: &'static str,
}

impl Nationality {
    pub fn form(&self, gender: Gender) -> &'static str {
        match gender {
            Gender::Masculine => self.masculine,
            Gender::Feminine => self.feminine,
        }
    }
}

pub const NATIONALITIES: &'static [Nationality] = &[
    Nationality { country: "Afganistán", masculine: "afgano", feminine: "afgana" },
    Nationality { country: "Alemania", masculine: "alemán", feminine: "alemana" },
    Nationality { country: "Argentina", masculine: "argentino", feminine: "argentina" },
    Nationality { country: "Australia", masculine: "australiano", feminine: "australiana" },
    Nationality { country: "Bangladesh", masculine: "bangladesí", feminine: "bangladesí" },
    Nationality { country: "Bélgica", masculine: "belga", feminine: "belga" },
    Nationality { country: "Brasil", masculine: "brasileño", feminine: "brasileña" },
    Nationality { country: "Canadá", masculine: "canadiense", feminine: "canadiense" },
    Nationality { country: "Chile", masculine: "chileno", feminine: "chilena" },
    Nationality { country: "China", masculine: "chino", feminine: "china" },
    Nationality { country: "Colombia", masculine: "colombiano", feminine: "colombiana" },
    Nationality { country: "España", masculine: "español", feminine: "española" },
    Nationality { country: "Estados Unidos", masculine: "estadounidense", feminine: "estadounidense" },
    Nationality { country: "Francia", masculine: "francés", feminine: "francesa" },
    Nationality { country: "India", masculine: "indio", feminine: "india" },
    Nationality { country: "Italia", masculine: "italiano", feminine: "italiana" },
    Nationality { country: "Japón", masculine: "japonés", feminine: "japonesa" },
    Nationality { country: "México", masculine: "mexicano", feminine: "mexicana" },
    Nationality { country: "Rusia", masculine: "ruso", feminine: "rusa" },
];

/// 冠詞クイズの名詞
#[derive(Copy, Clone, Debug)]
pub struct ArticleWord {
    pub word: &'static str,
    pub gender: Gender,
    pub plural: bool,
}

impl ArticleWord {
    pub fn definite(&self) -> &'static str {
        if self.plural { self.gender.definite_plural() } else { self.gender.definite() }
    }

    pub fn indefinite(&self) -> &'static str {
        if self.plural { self.gender.indefinite_plural() } else { self.gender.indefinite() }
    }
}

pub const ARTICLE_WORDS: &'static [ArticleWord] = &[
    ArticleWord { word: "coche", gender: Gender::Masculine, plural: false },
    ArticleWord { word: "chica", gender: Gender::Feminine, plural: false },
    ArticleWord { word: "libros", gender: Gender::Masculine, plural: true },
    ArticleWord { word: "casas", gender: Gender::Feminine, plural: true },
];

/// 所有形容詞クイズ
#[derive(Copy, Clone, Debug)]
pub struct PossessiveItem {
    pub owner: &'static str,
    pub item: &'static str,
    pub options: &'static [&'static str],
    pub answer: &'static str,
}

pub const POSSESSIVES: &'static [PossessiveItem] = &[
    PossessiveItem { owner: "Yo", item: "libro", options: &["mi", "mis", "tu"], answer: "mi" },
    PossessiveItem { owner: "Tú", item: "amigos", options: &["tu", "tus", "su"], answer: "tus" },
    PossessiveItem { owner: "Nosotros", item: "casa", options: &["nuestro", "nuestra", "sus"], answer: "nuestra" },
    PossessiveItem { owner: "Ellos", item: "perros", options: &["sus", "su", "nuestros"], answer: "sus" },
];

/// por / para の例文
#[derive(Copy, Clone, Debug)]
pub struct PorParaSentence {
    pub sentence: &'static str,
    pub correct: Preposition,
    pub explanation: &'static str,
}

pub const POR_PARA: &'static [PorParaSentence] = &[
    PorParaSentence { sentence: "Camino ___ el parque.", correct: Preposition::Por, explanation: "Movement through a place" },
    PorParaSentence { sentence: "Este regalo es ___ ti.", correct: Preposition::Para, explanation: "Recipient/destination" },
    PorParaSentence { sentence: "Trabajo ___ mi familia.", correct: Preposition::Para, explanation: "Purpose/goal" },
    PorParaSentence { sentence: "Voy ___ la mañana.", correct: Preposition::Por, explanation: "Time period (general)" },
    PorParaSentence { sentence: "Estudio ___ ser médico.", correct: Preposition::Para, explanation: "Purpose/goal" },
    PorParaSentence { sentence: "Lo hago ___ amor.", correct: Preposition::Por, explanation: "Cause/reason" },
    PorParaSentence { sentence: "La tarea es ___ mañana.", correct: Preposition::Para, explanation: "Deadline" },
    PorParaSentence { sentence: "Pagué $50 ___ el libro.", correct: Preposition::Por, explanation: "Exchange/price" },
];

/// 説明パネルに出す規則 (見出し, 本文)
pub type Rule = (&'static str, &'static [&'static str]);

pub const GENDER_RULES: &'static [Rule] = &[
    ("Sustantivos Masculinos (-o, -ma, -pa, -ta)", &[
        "Generalmente, las palabras que terminan en -o son masculinas (el libro).",
        "Palabras de origen griego que terminan en -ma, -pa, -ta son masculinas (el problema, el mapa).",
        "Días de la semana y meses son masculinos.",
    ]),
    ("Sustantivos Femeninos (-a, -ción, -sión, -dad, -tad, -tud)", &[
        "Generalmente, las palabras que terminan en -a son femeninas (la casa).",
        "Palabras que terminan en -ción, -sión, -dad, -tad, -tud son femeninas (la canción, la ciudad).",
    ]),
    ("Excepciones Importantes", &[
        "el día (the day)",
        "la mano (the hand)",
        "el agua (the water - uses 'el' for pronunciation, but is feminine)",
    ]),
];

pub const DEMONSTRATIVE_RULES: &'static [Rule] = &[
    ("Aquí (Close to speaker)", &[
        "Use este / esta / estos / estas for things right here.",
        "Ejemplo: Me gusta este libro. (I like this book.)",
    ]),
    ("Ahí (Not so close)", &[
        "Use ese / esa / esos / esas for things over there, near the listener.",
        "Ejemplo: Pásame esa silla. (Pass me that chair.)",
    ]),
    ("Allí (Far from both)", &[
        "Use aquel / aquella / aquellos / aquellas for things way over there.",
        "Ejemplo: ¿Ves aquel edificio? (Do you see that building way over there?)",
    ]),
];

pub const TIME_RULES: &'static [Rule] = &[
    ("Ser + La/Las", &[
        "Usa Es la para la una (1:00). Usa Son las para todas las demás horas.",
        "Ejemplos: Es la una. Son las tres.",
    ]),
    ("Minutos (1-30)", &[
        "Usa y para añadir minutos. 15 minutos es y cuarto. 30 minutos es y media.",
        "Ejemplos: Son las dos y diez. Es la una y cuarto. Son las cinco y media.",
    ]),
    ("Minutos (31-59)", &[
        "Di la próxima hora y resta los minutos que faltan con menos. 45 minutos es menos cuarto.",
        "Ejemplos: Son las tres menos veinte (2:40). Son las diez menos cuarto (9:45).",
    ]),
];

pub const ARTICLE_RULES: &'static [Rule] = &[
    ("Artículos Definidos (The)", &[
        "el (masculine, singular): el libro",
        "la (feminine, singular): la mesa",
        "los (masculine, plural): los libros",
        "las (feminine, plural): las mesas",
    ]),
    ("Artículos Indefinidos (A, An, Some)", &[
        "un (masculine, singular): un libro",
        "una (feminine, singular): una mesa",
        "unos (masculine, plural): unos libros",
        "unas (feminine, plural): unas mesas",
    ]),
];

pub const POSSESSIVE_RULES: &'static [Rule] = &[
    ("Mi / Mis (My)", &["mi libro (singular), mis libros (plural)"]),
    ("Tu / Tus (Your - informal)", &["tu casa (singular), tus casas (plural)"]),
    ("Su / Sus (His, Her, Your-formal, Their)", &["su perro (singular), sus perros (plural)"]),
    ("Nuestro / Nuestra / Nuestros / Nuestras (Our)", &[
        "nuestro coche, nuestra familia, nuestros amigos, nuestras amigas",
    ]),
];

pub const POR_PARA_RULES: &'static [Rule] = &[
    ("Usa POR para:", &[
        "Movimiento a través de: Camino por el parque.",
        "Causa/razón: Lo hago por amor.",
        "Períodos de tiempo: Estudio por la mañana.",
        "Intercambio/precio: Pagué $20 por el libro.",
        "Medio de comunicación: Hablo por teléfono.",
    ]),
    ("Usa PARA para:", &[
        "Destino/dirección: Voy para casa.",
        "Propósito/objetivo: Estudio para ser médico.",
        "Destinatario: Este regalo es para ti.",
        "Fecha límite: La tarea es para mañana.",
        "Opinión personal: Para mí, es difícil.",
    ]),
];
