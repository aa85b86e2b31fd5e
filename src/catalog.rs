// The fixed letter set the board pages through, plus the stroke palette.
// स्वर (vowels) and व्यंजन (consonants), each with a roman pronunciation
// and an example word (with its meaning gloss) for the window chrome.

use crate::types::Rgb;

#[derive(Clone, Copy, Debug)]
pub struct Letter {
    pub letter: &'static str,
    pub pronunciation: &'static str,
    pub example: &'static str,
    pub meaning: &'static str,
}

const fn l(
    letter: &'static str,
    pronunciation: &'static str,
    example: &'static str,
    meaning: &'static str,
) -> Letter {
    Letter {
        letter,
        pronunciation,
        example,
        meaning,
    }
}

/// स्वर (vowels).
pub const SWAR: [Letter; 12] = [
    l("अ", "a", "अनार", "डाळिंब"),
    l("आ", "aa", "आंबा", "फळ"),
    l("इ", "i", "इमारत", "बिल्डिंग"),
    l("ई", "ee", "ईडली", "खाद्यपदार्थ"),
    l("उ", "u", "उंट", "प्राणी"),
    l("ऊ", "oo", "ऊन", "सूर्यप्रकाश"),
    l("ए", "e", "एकतार", "वाद्य"),
    l("ऐ", "ai", "ऐरावत", "हत्ती"),
    l("ओ", "o", "ओवा", "मसाला"),
    l("औ", "au", "औषध", "दवाई"),
    l("अं", "am", "अंगठा", "हाताचे बोट"),
    l("अः", "ah", "दुःख", "वेदना"),
];

/// व्यंजन (consonants).
pub const VYANJAN: [Letter; 36] = [
    // क वर्ग
    l("क", "ka", "कमळ", "फूल"),
    l("ख", "kha", "खरगोश", "प्राणी"),
    l("ग", "ga", "गाय", "प्राणी"),
    l("घ", "gha", "घर", "राहण्याची जागा"),
    l("ङ", "nga", "पंख", "पक्ष्याचे"),
    // च वर्ग
    l("च", "cha", "चंद्र", "आकाशातील"),
    l("छ", "chha", "छत्री", "पावसाळी"),
    l("ज", "ja", "जहाज", "पाण्यातील वाहन"),
    l("झ", "jha", "झाड", "वनस्पती"),
    l("ञ", "nya", "पंजा", "हात"),
    // ट वर्ग
    l("ट", "ta", "टोपी", "कपडा"),
    l("ठ", "tha", "ठिकाण", "जागा"),
    l("ड", "da", "डोंगर", "पर्वत"),
    l("ढ", "dha", "ढोल", "वाद्य"),
    l("ण", "na", "बाण", "शस्त्र"),
    // त वर्ग
    l("त", "ta", "तारा", "आकाशातील"),
    l("थ", "tha", "थंडी", "हवामान"),
    l("द", "da", "दात", "शरीराचा भाग"),
    l("ध", "dha", "धनुष्य", "शस्त्र"),
    l("न", "na", "नाक", "शरीराचा भाग"),
    // प वर्ग
    l("प", "pa", "पतंग", "उडणारी"),
    l("फ", "pha", "फूल", "वनस्पती"),
    l("ब", "ba", "बदक", "पक्षी"),
    l("भ", "bha", "भात", "अन्न"),
    l("म", "ma", "मोर", "पक्षी"),
    // अंतस्थ
    l("य", "ya", "यंत्र", "मशीन"),
    l("र", "ra", "रथ", "वाहन"),
    l("ल", "la", "लिंबू", "फळ"),
    l("व", "va", "वाघ", "प्राणी"),
    // उष्मे
    l("श", "sha", "शाळा", "विद्यालय"),
    l("ष", "sha", "षटकोन", "आकार"),
    l("स", "sa", "सफरचंद", "फळ"),
    l("ह", "ha", "हत्ती", "प्राणी"),
    // संयुक्त
    l("ळ", "la", "बाळ", "लहान मूल"),
    l("क्ष", "ksha", "क्षेत्र", "जागा"),
    l("ज्ञ", "dnya", "ज्ञान", "विद्या"),
];

/// A selectable stroke color with its Marathi name.
#[derive(Clone, Copy, Debug)]
pub struct PaletteColor {
    pub name: &'static str,
    pub rgb: Rgb,
}

/// The six stroke swatches.
pub const PALETTE: [PaletteColor; 6] = [
    PaletteColor {
        name: "केशरी",
        rgb: Rgb::new(0xf9, 0x73, 0x16),
    },
    PaletteColor {
        name: "गुलाबी",
        rgb: Rgb::new(0xec, 0x48, 0x99),
    },
    PaletteColor {
        name: "निळा",
        rgb: Rgb::new(0x3b, 0x82, 0xf6),
    },
    PaletteColor {
        name: "हिरवा",
        rgb: Rgb::new(0x22, 0xc5, 0x5e),
    },
    PaletteColor {
        name: "जांभळा",
        rgb: Rgb::new(0xa8, 0x55, 0xf7),
    },
    PaletteColor {
        name: "लाल",
        rgb: Rgb::new(0xef, 0x44, 0x44),
    },
];
