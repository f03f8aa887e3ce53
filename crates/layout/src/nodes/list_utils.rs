/// How an ordered list renders its item numbers, selected by `<ol type="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingType {
    #[default]
    Arabic,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
}

impl NumberingType {
    /// Maps the HTML `type` attribute; anything unrecognized means arabic.
    pub fn from_type_attribute(value: &str) -> Self {
        match value {
            "a" => NumberingType::LowerAlpha,
            "A" => NumberingType::UpperAlpha,
            "i" => NumberingType::LowerRoman,
            "I" => NumberingType::UpperRoman,
            _ => NumberingType::Arabic,
        }
    }

    /// Renders `n`, falling back to arabic digits where the numbering
    /// system cannot represent the value.
    pub fn format(&self, n: i64) -> String {
        let rendered = match self {
            NumberingType::Arabic => None,
            NumberingType::LowerAlpha => positive(n).map(int_to_lower_alpha),
            NumberingType::UpperAlpha => positive(n).map(int_to_upper_alpha),
            NumberingType::LowerRoman => roman_range(n).map(int_to_lower_roman),
            NumberingType::UpperRoman => roman_range(n).map(int_to_upper_roman),
        };
        rendered.unwrap_or_else(|| n.to_string())
    }
}

const MAX_ROMAN: usize = 9999;

fn positive(n: i64) -> Option<usize> {
    usize::try_from(n).ok().filter(|&n| n >= 1)
}

fn roman_range(n: i64) -> Option<usize> {
    positive(n).filter(|&n| n <= MAX_ROMAN)
}

/// `1 -> a`, `26 -> z`, `27 -> aa`. Zero has no letter form.
pub fn int_to_lower_alpha(n: usize) -> String {
    let mut s = String::new();
    let mut num = n;
    while num > 0 {
        num -= 1;
        s.insert(0, (b'a' + (num % 26) as u8) as char);
        num /= 26;
    }
    s
}

pub fn int_to_upper_alpha(n: usize) -> String {
    int_to_lower_alpha(n).to_uppercase()
}

pub fn int_to_lower_roman(n: usize) -> String {
    let mut num = n;
    let values = [
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut result = String::new();
    for &(val, sym) in &values {
        while num >= val {
            result.push_str(sym);
            num -= val;
        }
    }
    result
}

pub fn int_to_upper_roman(n: usize) -> String {
    int_to_lower_roman(n).to_uppercase()
}
