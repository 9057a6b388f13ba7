// ============================================
// src/templates.rs
// 自己紹介・友達紹介のテンプレート
// ============================================

/// 入力欄 1 つ分 (ラベルと値)
#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }
}

/// テンプレートの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Introduce,
    Describe,
}

/// 入力欄の集合と、そこから組み立てる文
#[derive(Debug, Clone)]
pub struct Template {
    pub kind: TemplateKind,
    pub fields: Vec<Field>,
}

impl Template {
    /// 自己紹介 (既定値つき)
    pub fn introduce() -> Self {
        Self {
            kind: TemplateKind::Introduce,
            fields: vec![
                Field::new("Nombre (Name)", "Hamim Mubtasim"),
                Field::new("Edad (Age)", "24"),
                Field::new("País (Country)", "Bangladesh"),
                Field::new("Ciudad (City)", "Dhaka"),
                Field::new("Cumpleaños (Birthday, e.g., \"el diez de mayo\")", "el treinta de abril"),
                Field::new("Pasatiempo (Hobby, e.g., \"leer\")", "leer"),
                Field::new("Color Favorito (Favorite Color, e.g., \"azul\")", "azul"),
            ],
        }
    }

    /// 友達の紹介
    pub fn describe() -> Self {
        Self {
            kind: TemplateKind::Describe,
            fields: vec![
                Field::new("Nombre del Amigo (Friend's Name)", "Carlos"),
                Field::new("Edad (Age)", "20"),
                Field::new("Origen (Origin, e.g., \"México\")", "México"),
                Field::new("Pasatiempo (Hobby, e.g., \"jugar al fútbol\")", "jugar al fútbol"),
                Field::new("Adjetivo 1 (e.g., \"inteligente\")", "inteligente"),
                Field::new("Adjetivo 2 (e.g., \"divertido\")", "divertido"),
            ],
        }
    }

    fn value(&self, i: usize) -> &str {
        self.fields.get(i).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// (スペイン語, 英語) の行を組み立てる
    pub fn lines(&self) -> Vec<(String, String)> {
        match self.kind {
            TemplateKind::Introduce => {
                let (name, age, country, city) =
                    (self.value(0), self.value(1), self.value(2), self.value(3));
                let (birthday, hobby, color) = (self.value(4), self.value(5), self.value(6));
                vec![
                    (format!("Hola, me llamo {name}."), format!("Hello, my name is {name}.")),
                    (format!("Tengo {age} años."), format!("I am {age} years old.")),
                    (format!("Soy de {country}."), format!("I am from {country}.")),
                    (format!("Vivo en {city}."), format!("I live in {city}.")),
                    (
                        "Soy estudiante en la Universidad de Dhaka.".to_string(),
                        "I am a student at the University of Dhaka.".to_string(),
                    ),
                    (
                        "Estudio Administración de Empresas.".to_string(),
                        "I study Business Administration.".to_string(),
                    ),
                    (format!("Mi cumpleaños es {birthday}."), format!("My birthday is {birthday}.")),
                    (
                        format!("En mi tiempo libre, me gusta {hobby}."),
                        format!("In my free time, I like to {hobby}."),
                    ),
                    (
                        format!("Mi color favorito es el {color}."),
                        format!("My favorite color is {color}."),
                    ),
                    (
                        "Mucho gusto en conocerte.".to_string(),
                        "It's a pleasure to meet you.".to_string(),
                    ),
                ]
            }
            TemplateKind::Describe => {
                let (name, age, origin) = (self.value(0), self.value(1), self.value(2));
                let (hobby, adj1, adj2) = (self.value(3), self.value(4), self.value(5));
                vec![
                    (format!("Este es mi amigo, {name}."), format!("This is my friend, {name}.")),
                    (format!("Él es de {origin}."), format!("He is from {origin}.")),
                    (format!("Él tiene {age} años."), format!("He is {age} years old.")),
                    (
                        format!("{name} es muy {adj1} y {adj2}."),
                        format!("{name} is very {adj1} and {adj2}."),
                    ),
                    (format!("A él le gusta {hobby}."), format!("He likes to {hobby}.")),
                    (
                        "Nosotros somos buenos amigos.".to_string(),
                        "We are good friends.".to_string(),
                    ),
                ]
            }
        }
    }
}
