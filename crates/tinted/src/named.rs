//! A table of several hundred named colors.
//!
//! Names are uppercase identifiers that may include digits, e.g., `SIENNA` or
//! `SEAGREEN3`. Lookup is case-sensitive. The table is kept in its original
//! order, which includes one name bound twice: `INDIANRED` is first bound to
//! `(176, 23, 31)` and then to `(205, 92, 92)`. [`lookup`] honors the later
//! binding, whereas [`NAMED_COLORS`] retains both entries.
//!
//! ```
//! # use tinted::named::lookup;
//! # use tinted::Rgb;
//! assert_eq!(lookup("SIENNA"), Some(Rgb::new(160, 82, 45)));
//! assert_eq!(lookup("INDIANRED"), Some(Rgb::new(205, 92, 92)));
//! assert_eq!(lookup("sienna"), None);
//! ```

use crate::Rgb;

/// Look up the color with the given name.
///
/// If the table binds a name more than once, the last binding wins.
pub fn lookup(name: &str) -> Option<Rgb> {
    NAMED_COLORS
        .iter()
        .rev()
        .find(|(n, _)| *n == name)
        .map(|(_, rgb)| *rgb)
}

/// Get an iterator over the names in the table, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    NAMED_COLORS.iter().map(|(name, _)| *name)
}

/// The named colors, in table order.
#[rustfmt::skip]
pub const NAMED_COLORS: [(&str, Rgb); 552] = [
    ("ALICEBLUE",            Rgb::new(240, 248, 255)),
    ("ANTIQUEWHITE",         Rgb::new(250, 235, 215)),
    ("ANTIQUEWHITE1",        Rgb::new(255, 239, 219)),
    ("ANTIQUEWHITE2",        Rgb::new(238, 223, 204)),
    ("ANTIQUEWHITE3",        Rgb::new(205, 192, 176)),
    ("ANTIQUEWHITE4",        Rgb::new(139, 131, 120)),
    ("AQUA",                 Rgb::new(  0, 255, 255)),
    ("AQUAMARINE1",          Rgb::new(127, 255, 212)),
    ("AQUAMARINE2",          Rgb::new(118, 238, 198)),
    ("AQUAMARINE3",          Rgb::new(102, 205, 170)),
    ("AQUAMARINE4",          Rgb::new( 69, 139, 116)),
    ("AZURE1",               Rgb::new(240, 255, 255)),
    ("AZURE2",               Rgb::new(224, 238, 238)),
    ("AZURE3",               Rgb::new(193, 205, 205)),
    ("AZURE4",               Rgb::new(131, 139, 139)),
    ("BANANA",               Rgb::new(227, 207,  87)),
    ("BEIGE",                Rgb::new(245, 245, 220)),
    ("BISQUE1",              Rgb::new(255, 228, 196)),
    ("BISQUE2",              Rgb::new(238, 213, 183)),
    ("BISQUE3",              Rgb::new(205, 183, 158)),
    ("BISQUE4",              Rgb::new(139, 125, 107)),
    ("BLACK",                Rgb::new(  0,   0,   0)),
    ("BLANCHEDALMOND",       Rgb::new(255, 235, 205)),
    ("BLUE",                 Rgb::new(  0,   0, 255)),
    ("BLUE2",                Rgb::new(  0,   0, 238)),
    ("BLUE3",                Rgb::new(  0,   0, 205)),
    ("BLUE4",                Rgb::new(  0,   0, 139)),
    ("BLUEVIOLET",           Rgb::new(138,  43, 226)),
    ("BRICK",                Rgb::new(156, 102,  31)),
    ("BROWN",                Rgb::new(165,  42,  42)),
    ("BROWN1",               Rgb::new(255,  64,  64)),
    ("BROWN2",               Rgb::new(238,  59,  59)),
    ("BROWN3",               Rgb::new(205,  51,  51)),
    ("BROWN4",               Rgb::new(139,  35,  35)),
    ("BURLYWOOD",            Rgb::new(222, 184, 135)),
    ("BURLYWOOD1",           Rgb::new(255, 211, 155)),
    ("BURLYWOOD2",           Rgb::new(238, 197, 145)),
    ("BURLYWOOD3",           Rgb::new(205, 170, 125)),
    ("BURLYWOOD4",           Rgb::new(139, 115,  85)),
    ("BURNTSIENNA",          Rgb::new(138,  54,  15)),
    ("BURNTUMBER",           Rgb::new(138,  51,  36)),
    ("CADETBLUE",            Rgb::new( 95, 158, 160)),
    ("CADETBLUE1",           Rgb::new(152, 245, 255)),
    ("CADETBLUE2",           Rgb::new(142, 229, 238)),
    ("CADETBLUE3",           Rgb::new(122, 197, 205)),
    ("CADETBLUE4",           Rgb::new( 83, 134, 139)),
    ("CADMIUMORANGE",        Rgb::new(255,  97,   3)),
    ("CADMIUMYELLOW",        Rgb::new(255, 153,  18)),
    ("CARROT",               Rgb::new(237, 145,  33)),
    ("CHARTREUSE1",          Rgb::new(127, 255,   0)),
    ("CHARTREUSE2",          Rgb::new(118, 238,   0)),
    ("CHARTREUSE3",          Rgb::new(102, 205,   0)),
    ("CHARTREUSE4",          Rgb::new( 69, 139,   0)),
    ("CHOCOLATE",            Rgb::new(210, 105,  30)),
    ("CHOCOLATE1",           Rgb::new(255, 127,  36)),
    ("CHOCOLATE2",           Rgb::new(238, 118,  33)),
    ("CHOCOLATE3",           Rgb::new(205, 102,  29)),
    ("CHOCOLATE4",           Rgb::new(139,  69,  19)),
    ("COBALT",               Rgb::new( 61,  89, 171)),
    ("COBALTGREEN",          Rgb::new( 61, 145,  64)),
    ("COLDGREY",             Rgb::new(128, 138, 135)),
    ("CORAL",                Rgb::new(255, 127,  80)),
    ("CORAL1",               Rgb::new(255, 114,  86)),
    ("CORAL2",               Rgb::new(238, 106,  80)),
    ("CORAL3",               Rgb::new(205,  91,  69)),
    ("CORAL4",               Rgb::new(139,  62,  47)),
    ("CORNFLOWERBLUE",       Rgb::new(100, 149, 237)),
    ("CORNSILK1",            Rgb::new(255, 248, 220)),
    ("CORNSILK2",            Rgb::new(238, 232, 205)),
    ("CORNSILK3",            Rgb::new(205, 200, 177)),
    ("CORNSILK4",            Rgb::new(139, 136, 120)),
    ("CRIMSON",              Rgb::new(220,  20,  60)),
    ("CYAN2",                Rgb::new(  0, 238, 238)),
    ("CYAN3",                Rgb::new(  0, 205, 205)),
    ("CYAN4",                Rgb::new(  0, 139, 139)),
    ("DARKGOLDENROD",        Rgb::new(184, 134,  11)),
    ("DARKGOLDENROD1",       Rgb::new(255, 185,  15)),
    ("DARKGOLDENROD2",       Rgb::new(238, 173,  14)),
    ("DARKGOLDENROD3",       Rgb::new(205, 149,  12)),
    ("DARKGOLDENROD4",       Rgb::new(139, 101,   8)),
    ("DARKGRAY",             Rgb::new(169, 169, 169)),
    ("DARKGREEN",            Rgb::new(  0, 100,   0)),
    ("DARKKHAKI",            Rgb::new(189, 183, 107)),
    ("DARKOLIVEGREEN",       Rgb::new( 85, 107,  47)),
    ("DARKOLIVEGREEN1",      Rgb::new(202, 255, 112)),
    ("DARKOLIVEGREEN2",      Rgb::new(188, 238, 104)),
    ("DARKOLIVEGREEN3",      Rgb::new(162, 205,  90)),
    ("DARKOLIVEGREEN4",      Rgb::new(110, 139,  61)),
    ("DARKORANGE",           Rgb::new(255, 140,   0)),
    ("DARKORANGE1",          Rgb::new(255, 127,   0)),
    ("DARKORANGE2",          Rgb::new(238, 118,   0)),
    ("DARKORANGE3",          Rgb::new(205, 102,   0)),
    ("DARKORANGE4",          Rgb::new(139,  69,   0)),
    ("DARKORCHID",           Rgb::new(153,  50, 204)),
    ("DARKORCHID1",          Rgb::new(191,  62, 255)),
    ("DARKORCHID2",          Rgb::new(178,  58, 238)),
    ("DARKORCHID3",          Rgb::new(154,  50, 205)),
    ("DARKORCHID4",          Rgb::new(104,  34, 139)),
    ("DARKSALMON",           Rgb::new(233, 150, 122)),
    ("DARKSEAGREEN",         Rgb::new(143, 188, 143)),
    ("DARKSEAGREEN1",        Rgb::new(193, 255, 193)),
    ("DARKSEAGREEN2",        Rgb::new(180, 238, 180)),
    ("DARKSEAGREEN3",        Rgb::new(155, 205, 155)),
    ("DARKSEAGREEN4",        Rgb::new(105, 139, 105)),
    ("DARKSLATEBLUE",        Rgb::new( 72,  61, 139)),
    ("DARKSLATEGRAY",        Rgb::new( 47,  79,  79)),
    ("DARKSLATEGRAY1",       Rgb::new(151, 255, 255)),
    ("DARKSLATEGRAY2",       Rgb::new(141, 238, 238)),
    ("DARKSLATEGRAY3",       Rgb::new(121, 205, 205)),
    ("DARKSLATEGRAY4",       Rgb::new( 82, 139, 139)),
    ("DARKTURQUOISE",        Rgb::new(  0, 206, 209)),
    ("DARKVIOLET",           Rgb::new(148,   0, 211)),
    ("DEEPPINK1",            Rgb::new(255,  20, 147)),
    ("DEEPPINK2",            Rgb::new(238,  18, 137)),
    ("DEEPPINK3",            Rgb::new(205,  16, 118)),
    ("DEEPPINK4",            Rgb::new(139,  10,  80)),
    ("DEEPSKYBLUE1",         Rgb::new(  0, 191, 255)),
    ("DEEPSKYBLUE2",         Rgb::new(  0, 178, 238)),
    ("DEEPSKYBLUE3",         Rgb::new(  0, 154, 205)),
    ("DEEPSKYBLUE4",         Rgb::new(  0, 104, 139)),
    ("DIMGRAY",              Rgb::new(105, 105, 105)),
    ("DODGERBLUE1",          Rgb::new( 30, 144, 255)),
    ("DODGERBLUE2",          Rgb::new( 28, 134, 238)),
    ("DODGERBLUE3",          Rgb::new( 24, 116, 205)),
    ("DODGERBLUE4",          Rgb::new( 16,  78, 139)),
    ("EGGSHELL",             Rgb::new(252, 230, 201)),
    ("EMERALDGREEN",         Rgb::new(  0, 201,  87)),
    ("FIREBRICK",            Rgb::new(178,  34,  34)),
    ("FIREBRICK1",           Rgb::new(255,  48,  48)),
    ("FIREBRICK2",           Rgb::new(238,  44,  44)),
    ("FIREBRICK3",           Rgb::new(205,  38,  38)),
    ("FIREBRICK4",           Rgb::new(139,  26,  26)),
    ("FLESH",                Rgb::new(255, 125,  64)),
    ("FLORALWHITE",          Rgb::new(255, 250, 240)),
    ("FORESTGREEN",          Rgb::new( 34, 139,  34)),
    ("GAINSBORO",            Rgb::new(220, 220, 220)),
    ("GHOSTWHITE",           Rgb::new(248, 248, 255)),
    ("GOLD1",                Rgb::new(255, 215,   0)),
    ("GOLD2",                Rgb::new(238, 201,   0)),
    ("GOLD3",                Rgb::new(205, 173,   0)),
    ("GOLD4",                Rgb::new(139, 117,   0)),
    ("GOLDENROD",            Rgb::new(218, 165,  32)),
    ("GOLDENROD1",           Rgb::new(255, 193,  37)),
    ("GOLDENROD2",           Rgb::new(238, 180,  34)),
    ("GOLDENROD3",           Rgb::new(205, 155,  29)),
    ("GOLDENROD4",           Rgb::new(139, 105,  20)),
    ("GRAY",                 Rgb::new(128, 128, 128)),
    ("GRAY1",                Rgb::new(  3,   3,   3)),
    ("GRAY10",               Rgb::new( 26,  26,  26)),
    ("GRAY11",               Rgb::new( 28,  28,  28)),
    ("GRAY12",               Rgb::new( 31,  31,  31)),
    ("GRAY13",               Rgb::new( 33,  33,  33)),
    ("GRAY14",               Rgb::new( 36,  36,  36)),
    ("GRAY15",               Rgb::new( 38,  38,  38)),
    ("GRAY16",               Rgb::new( 41,  41,  41)),
    ("GRAY17",               Rgb::new( 43,  43,  43)),
    ("GRAY18",               Rgb::new( 46,  46,  46)),
    ("GRAY19",               Rgb::new( 48,  48,  48)),
    ("GRAY2",                Rgb::new(  5,   5,   5)),
    ("GRAY20",               Rgb::new( 51,  51,  51)),
    ("GRAY21",               Rgb::new( 54,  54,  54)),
    ("GRAY22",               Rgb::new( 56,  56,  56)),
    ("GRAY23",               Rgb::new( 59,  59,  59)),
    ("GRAY24",               Rgb::new( 61,  61,  61)),
    ("GRAY25",               Rgb::new( 64,  64,  64)),
    ("GRAY26",               Rgb::new( 66,  66,  66)),
    ("GRAY27",               Rgb::new( 69,  69,  69)),
    ("GRAY28",               Rgb::new( 71,  71,  71)),
    ("GRAY29",               Rgb::new( 74,  74,  74)),
    ("GRAY3",                Rgb::new(  8,   8,   8)),
    ("GRAY30",               Rgb::new( 77,  77,  77)),
    ("GRAY31",               Rgb::new( 79,  79,  79)),
    ("GRAY32",               Rgb::new( 82,  82,  82)),
    ("GRAY33",               Rgb::new( 84,  84,  84)),
    ("GRAY34",               Rgb::new( 87,  87,  87)),
    ("GRAY35",               Rgb::new( 89,  89,  89)),
    ("GRAY36",               Rgb::new( 92,  92,  92)),
    ("GRAY37",               Rgb::new( 94,  94,  94)),
    ("GRAY38",               Rgb::new( 97,  97,  97)),
    ("GRAY39",               Rgb::new( 99,  99,  99)),
    ("GRAY4",                Rgb::new( 10,  10,  10)),
    ("GRAY40",               Rgb::new(102, 102, 102)),
    ("GRAY42",               Rgb::new(107, 107, 107)),
    ("GRAY43",               Rgb::new(110, 110, 110)),
    ("GRAY44",               Rgb::new(112, 112, 112)),
    ("GRAY45",               Rgb::new(115, 115, 115)),
    ("GRAY46",               Rgb::new(117, 117, 117)),
    ("GRAY47",               Rgb::new(120, 120, 120)),
    ("GRAY48",               Rgb::new(122, 122, 122)),
    ("GRAY49",               Rgb::new(125, 125, 125)),
    ("GRAY5",                Rgb::new( 13,  13,  13)),
    ("GRAY50",               Rgb::new(127, 127, 127)),
    ("GRAY51",               Rgb::new(130, 130, 130)),
    ("GRAY52",               Rgb::new(133, 133, 133)),
    ("GRAY53",               Rgb::new(135, 135, 135)),
    ("GRAY54",               Rgb::new(138, 138, 138)),
    ("GRAY55",               Rgb::new(140, 140, 140)),
    ("GRAY56",               Rgb::new(143, 143, 143)),
    ("GRAY57",               Rgb::new(145, 145, 145)),
    ("GRAY58",               Rgb::new(148, 148, 148)),
    ("GRAY59",               Rgb::new(150, 150, 150)),
    ("GRAY6",                Rgb::new( 15,  15,  15)),
    ("GRAY60",               Rgb::new(153, 153, 153)),
    ("GRAY61",               Rgb::new(156, 156, 156)),
    ("GRAY62",               Rgb::new(158, 158, 158)),
    ("GRAY63",               Rgb::new(161, 161, 161)),
    ("GRAY64",               Rgb::new(163, 163, 163)),
    ("GRAY65",               Rgb::new(166, 166, 166)),
    ("GRAY66",               Rgb::new(168, 168, 168)),
    ("GRAY67",               Rgb::new(171, 171, 171)),
    ("GRAY68",               Rgb::new(173, 173, 173)),
    ("GRAY69",               Rgb::new(176, 176, 176)),
    ("GRAY7",                Rgb::new( 18,  18,  18)),
    ("GRAY70",               Rgb::new(179, 179, 179)),
    ("GRAY71",               Rgb::new(181, 181, 181)),
    ("GRAY72",               Rgb::new(184, 184, 184)),
    ("GRAY73",               Rgb::new(186, 186, 186)),
    ("GRAY74",               Rgb::new(189, 189, 189)),
    ("GRAY75",               Rgb::new(191, 191, 191)),
    ("GRAY76",               Rgb::new(194, 194, 194)),
    ("GRAY77",               Rgb::new(196, 196, 196)),
    ("GRAY78",               Rgb::new(199, 199, 199)),
    ("GRAY79",               Rgb::new(201, 201, 201)),
    ("GRAY8",                Rgb::new( 20,  20,  20)),
    ("GRAY80",               Rgb::new(204, 204, 204)),
    ("GRAY81",               Rgb::new(207, 207, 207)),
    ("GRAY82",               Rgb::new(209, 209, 209)),
    ("GRAY83",               Rgb::new(212, 212, 212)),
    ("GRAY84",               Rgb::new(214, 214, 214)),
    ("GRAY85",               Rgb::new(217, 217, 217)),
    ("GRAY86",               Rgb::new(219, 219, 219)),
    ("GRAY87",               Rgb::new(222, 222, 222)),
    ("GRAY88",               Rgb::new(224, 224, 224)),
    ("GRAY89",               Rgb::new(227, 227, 227)),
    ("GRAY9",                Rgb::new( 23,  23,  23)),
    ("GRAY90",               Rgb::new(229, 229, 229)),
    ("GRAY91",               Rgb::new(232, 232, 232)),
    ("GRAY92",               Rgb::new(235, 235, 235)),
    ("GRAY93",               Rgb::new(237, 237, 237)),
    ("GRAY94",               Rgb::new(240, 240, 240)),
    ("GRAY95",               Rgb::new(242, 242, 242)),
    ("GRAY97",               Rgb::new(247, 247, 247)),
    ("GRAY98",               Rgb::new(250, 250, 250)),
    ("GRAY99",               Rgb::new(252, 252, 252)),
    ("GREEN",                Rgb::new(  0, 128,   0)),
    ("GREEN1",               Rgb::new(  0, 255,   0)),
    ("GREEN2",               Rgb::new(  0, 238,   0)),
    ("GREEN3",               Rgb::new(  0, 205,   0)),
    ("GREEN4",               Rgb::new(  0, 139,   0)),
    ("GREENYELLOW",          Rgb::new(173, 255,  47)),
    ("HONEYDEW1",            Rgb::new(240, 255, 240)),
    ("HONEYDEW2",            Rgb::new(224, 238, 224)),
    ("HONEYDEW3",            Rgb::new(193, 205, 193)),
    ("HONEYDEW4",            Rgb::new(131, 139, 131)),
    ("HOTPINK",              Rgb::new(255, 105, 180)),
    ("HOTPINK1",             Rgb::new(255, 110, 180)),
    ("HOTPINK2",             Rgb::new(238, 106, 167)),
    ("HOTPINK3",             Rgb::new(205,  96, 144)),
    ("HOTPINK4",             Rgb::new(139,  58,  98)),
    ("INDIANRED",            Rgb::new(176,  23,  31)),
    ("INDIANRED",            Rgb::new(205,  92,  92)),
    ("INDIANRED1",           Rgb::new(255, 106, 106)),
    ("INDIANRED2",           Rgb::new(238,  99,  99)),
    ("INDIANRED3",           Rgb::new(205,  85,  85)),
    ("INDIANRED4",           Rgb::new(139,  58,  58)),
    ("INDIGO",               Rgb::new( 75,   0, 130)),
    ("IVORY1",               Rgb::new(255, 255, 240)),
    ("IVORY2",               Rgb::new(238, 238, 224)),
    ("IVORY3",               Rgb::new(205, 205, 193)),
    ("IVORY4",               Rgb::new(139, 139, 131)),
    ("IVORYBLACK",           Rgb::new( 41,  36,  33)),
    ("KHAKI",                Rgb::new(240, 230, 140)),
    ("KHAKI1",               Rgb::new(255, 246, 143)),
    ("KHAKI2",               Rgb::new(238, 230, 133)),
    ("KHAKI3",               Rgb::new(205, 198, 115)),
    ("KHAKI4",               Rgb::new(139, 134,  78)),
    ("LAVENDER",             Rgb::new(230, 230, 250)),
    ("LAVENDERBLUSH1",       Rgb::new(255, 240, 245)),
    ("LAVENDERBLUSH2",       Rgb::new(238, 224, 229)),
    ("LAVENDERBLUSH3",       Rgb::new(205, 193, 197)),
    ("LAVENDERBLUSH4",       Rgb::new(139, 131, 134)),
    ("LAWNGREEN",            Rgb::new(124, 252,   0)),
    ("LEMONCHIFFON1",        Rgb::new(255, 250, 205)),
    ("LEMONCHIFFON2",        Rgb::new(238, 233, 191)),
    ("LEMONCHIFFON3",        Rgb::new(205, 201, 165)),
    ("LEMONCHIFFON4",        Rgb::new(139, 137, 112)),
    ("LIGHTBLUE",            Rgb::new(173, 216, 230)),
    ("LIGHTBLUE1",           Rgb::new(191, 239, 255)),
    ("LIGHTBLUE2",           Rgb::new(178, 223, 238)),
    ("LIGHTBLUE3",           Rgb::new(154, 192, 205)),
    ("LIGHTBLUE4",           Rgb::new(104, 131, 139)),
    ("LIGHTCORAL",           Rgb::new(240, 128, 128)),
    ("LIGHTCYAN1",           Rgb::new(224, 255, 255)),
    ("LIGHTCYAN2",           Rgb::new(209, 238, 238)),
    ("LIGHTCYAN3",           Rgb::new(180, 205, 205)),
    ("LIGHTCYAN4",           Rgb::new(122, 139, 139)),
    ("LIGHTGOLDENROD1",      Rgb::new(255, 236, 139)),
    ("LIGHTGOLDENROD2",      Rgb::new(238, 220, 130)),
    ("LIGHTGOLDENROD3",      Rgb::new(205, 190, 112)),
    ("LIGHTGOLDENROD4",      Rgb::new(139, 129,  76)),
    ("LIGHTGOLDENRODYELLOW", Rgb::new(250, 250, 210)),
    ("LIGHTGREY",            Rgb::new(211, 211, 211)),
    ("LIGHTPINK",            Rgb::new(255, 182, 193)),
    ("LIGHTPINK1",           Rgb::new(255, 174, 185)),
    ("LIGHTPINK2",           Rgb::new(238, 162, 173)),
    ("LIGHTPINK3",           Rgb::new(205, 140, 149)),
    ("LIGHTPINK4",           Rgb::new(139,  95, 101)),
    ("LIGHTSALMON1",         Rgb::new(255, 160, 122)),
    ("LIGHTSALMON2",         Rgb::new(238, 149, 114)),
    ("LIGHTSALMON3",         Rgb::new(205, 129,  98)),
    ("LIGHTSALMON4",         Rgb::new(139,  87,  66)),
    ("LIGHTSEAGREEN",        Rgb::new( 32, 178, 170)),
    ("LIGHTSKYBLUE",         Rgb::new(135, 206, 250)),
    ("LIGHTSKYBLUE1",        Rgb::new(176, 226, 255)),
    ("LIGHTSKYBLUE2",        Rgb::new(164, 211, 238)),
    ("LIGHTSKYBLUE3",        Rgb::new(141, 182, 205)),
    ("LIGHTSKYBLUE4",        Rgb::new( 96, 123, 139)),
    ("LIGHTSLATEBLUE",       Rgb::new(132, 112, 255)),
    ("LIGHTSLATEGRAY",       Rgb::new(119, 136, 153)),
    ("LIGHTSTEELBLUE",       Rgb::new(176, 196, 222)),
    ("LIGHTSTEELBLUE1",      Rgb::new(202, 225, 255)),
    ("LIGHTSTEELBLUE2",      Rgb::new(188, 210, 238)),
    ("LIGHTSTEELBLUE3",      Rgb::new(162, 181, 205)),
    ("LIGHTSTEELBLUE4",      Rgb::new(110, 123, 139)),
    ("LIGHTYELLOW1",         Rgb::new(255, 255, 224)),
    ("LIGHTYELLOW2",         Rgb::new(238, 238, 209)),
    ("LIGHTYELLOW3",         Rgb::new(205, 205, 180)),
    ("LIGHTYELLOW4",         Rgb::new(139, 139, 122)),
    ("LIMEGREEN",            Rgb::new( 50, 205,  50)),
    ("LINEN",                Rgb::new(250, 240, 230)),
    ("MAGENTA",              Rgb::new(255,   0, 255)),
    ("MAGENTA2",             Rgb::new(238,   0, 238)),
    ("MAGENTA3",             Rgb::new(205,   0, 205)),
    ("MAGENTA4",             Rgb::new(139,   0, 139)),
    ("MANGANESEBLUE",        Rgb::new(  3, 168, 158)),
    ("MAROON",               Rgb::new(128,   0,   0)),
    ("MAROON1",              Rgb::new(255,  52, 179)),
    ("MAROON2",              Rgb::new(238,  48, 167)),
    ("MAROON3",              Rgb::new(205,  41, 144)),
    ("MAROON4",              Rgb::new(139,  28,  98)),
    ("MEDIUMORCHID",         Rgb::new(186,  85, 211)),
    ("MEDIUMORCHID1",        Rgb::new(224, 102, 255)),
    ("MEDIUMORCHID2",        Rgb::new(209,  95, 238)),
    ("MEDIUMORCHID3",        Rgb::new(180,  82, 205)),
    ("MEDIUMORCHID4",        Rgb::new(122,  55, 139)),
    ("MEDIUMPURPLE",         Rgb::new(147, 112, 219)),
    ("MEDIUMPURPLE1",        Rgb::new(171, 130, 255)),
    ("MEDIUMPURPLE2",        Rgb::new(159, 121, 238)),
    ("MEDIUMPURPLE3",        Rgb::new(137, 104, 205)),
    ("MEDIUMPURPLE4",        Rgb::new( 93,  71, 139)),
    ("MEDIUMSEAGREEN",       Rgb::new( 60, 179, 113)),
    ("MEDIUMSLATEBLUE",      Rgb::new(123, 104, 238)),
    ("MEDIUMSPRINGGREEN",    Rgb::new(  0, 250, 154)),
    ("MEDIUMTURQUOISE",      Rgb::new( 72, 209, 204)),
    ("MEDIUMVIOLETRED",      Rgb::new(199,  21, 133)),
    ("MELON",                Rgb::new(227, 168, 105)),
    ("MIDNIGHTBLUE",         Rgb::new( 25,  25, 112)),
    ("MINT",                 Rgb::new(189, 252, 201)),
    ("MINTCREAM",            Rgb::new(245, 255, 250)),
    ("MISTYROSE1",           Rgb::new(255, 228, 225)),
    ("MISTYROSE2",           Rgb::new(238, 213, 210)),
    ("MISTYROSE3",           Rgb::new(205, 183, 181)),
    ("MISTYROSE4",           Rgb::new(139, 125, 123)),
    ("MOCCASIN",             Rgb::new(255, 228, 181)),
    ("NAVAJOWHITE1",         Rgb::new(255, 222, 173)),
    ("NAVAJOWHITE2",         Rgb::new(238, 207, 161)),
    ("NAVAJOWHITE3",         Rgb::new(205, 179, 139)),
    ("NAVAJOWHITE4",         Rgb::new(139, 121,  94)),
    ("NAVY",                 Rgb::new(  0,   0, 128)),
    ("OLDLACE",              Rgb::new(253, 245, 230)),
    ("OLIVE",                Rgb::new(128, 128,   0)),
    ("OLIVEDRAB",            Rgb::new(107, 142,  35)),
    ("OLIVEDRAB1",           Rgb::new(192, 255,  62)),
    ("OLIVEDRAB2",           Rgb::new(179, 238,  58)),
    ("OLIVEDRAB3",           Rgb::new(154, 205,  50)),
    ("OLIVEDRAB4",           Rgb::new(105, 139,  34)),
    ("ORANGE",               Rgb::new(255, 128,   0)),
    ("ORANGE1",              Rgb::new(255, 165,   0)),
    ("ORANGE2",              Rgb::new(238, 154,   0)),
    ("ORANGE3",              Rgb::new(205, 133,   0)),
    ("ORANGE4",              Rgb::new(139,  90,   0)),
    ("ORANGERED1",           Rgb::new(255,  69,   0)),
    ("ORANGERED2",           Rgb::new(238,  64,   0)),
    ("ORANGERED3",           Rgb::new(205,  55,   0)),
    ("ORANGERED4",           Rgb::new(139,  37,   0)),
    ("ORCHID",               Rgb::new(218, 112, 214)),
    ("ORCHID1",              Rgb::new(255, 131, 250)),
    ("ORCHID2",              Rgb::new(238, 122, 233)),
    ("ORCHID3",              Rgb::new(205, 105, 201)),
    ("ORCHID4",              Rgb::new(139,  71, 137)),
    ("PALEGOLDENROD",        Rgb::new(238, 232, 170)),
    ("PALEGREEN",            Rgb::new(152, 251, 152)),
    ("PALEGREEN1",           Rgb::new(154, 255, 154)),
    ("PALEGREEN2",           Rgb::new(144, 238, 144)),
    ("PALEGREEN3",           Rgb::new(124, 205, 124)),
    ("PALEGREEN4",           Rgb::new( 84, 139,  84)),
    ("PALETURQUOISE1",       Rgb::new(187, 255, 255)),
    ("PALETURQUOISE2",       Rgb::new(174, 238, 238)),
    ("PALETURQUOISE3",       Rgb::new(150, 205, 205)),
    ("PALETURQUOISE4",       Rgb::new(102, 139, 139)),
    ("PALEVIOLETRED",        Rgb::new(219, 112, 147)),
    ("PALEVIOLETRED1",       Rgb::new(255, 130, 171)),
    ("PALEVIOLETRED2",       Rgb::new(238, 121, 159)),
    ("PALEVIOLETRED3",       Rgb::new(205, 104, 137)),
    ("PALEVIOLETRED4",       Rgb::new(139,  71,  93)),
    ("PAPAYAWHIP",           Rgb::new(255, 239, 213)),
    ("PEACHPUFF1",           Rgb::new(255, 218, 185)),
    ("PEACHPUFF2",           Rgb::new(238, 203, 173)),
    ("PEACHPUFF3",           Rgb::new(205, 175, 149)),
    ("PEACHPUFF4",           Rgb::new(139, 119, 101)),
    ("PEACOCK",              Rgb::new( 51, 161, 201)),
    ("PINK",                 Rgb::new(255, 192, 203)),
    ("PINK1",                Rgb::new(255, 181, 197)),
    ("PINK2",                Rgb::new(238, 169, 184)),
    ("PINK3",                Rgb::new(205, 145, 158)),
    ("PINK4",                Rgb::new(139,  99, 108)),
    ("PLUM",                 Rgb::new(221, 160, 221)),
    ("PLUM1",                Rgb::new(255, 187, 255)),
    ("PLUM2",                Rgb::new(238, 174, 238)),
    ("PLUM3",                Rgb::new(205, 150, 205)),
    ("PLUM4",                Rgb::new(139, 102, 139)),
    ("POWDERBLUE",           Rgb::new(176, 224, 230)),
    ("PURPLE",               Rgb::new(128,   0, 128)),
    ("PURPLE1",              Rgb::new(155,  48, 255)),
    ("PURPLE2",              Rgb::new(145,  44, 238)),
    ("PURPLE3",              Rgb::new(125,  38, 205)),
    ("PURPLE4",              Rgb::new( 85,  26, 139)),
    ("RASPBERRY",            Rgb::new(135,  38,  87)),
    ("RAWSIENNA",            Rgb::new(199,  97,  20)),
    ("RED1",                 Rgb::new(255,   0,   0)),
    ("RED2",                 Rgb::new(238,   0,   0)),
    ("RED3",                 Rgb::new(205,   0,   0)),
    ("RED4",                 Rgb::new(139,   0,   0)),
    ("ROSYBROWN",            Rgb::new(188, 143, 143)),
    ("ROSYBROWN1",           Rgb::new(255, 193, 193)),
    ("ROSYBROWN2",           Rgb::new(238, 180, 180)),
    ("ROSYBROWN3",           Rgb::new(205, 155, 155)),
    ("ROSYBROWN4",           Rgb::new(139, 105, 105)),
    ("ROYALBLUE",            Rgb::new( 65, 105, 225)),
    ("ROYALBLUE1",           Rgb::new( 72, 118, 255)),
    ("ROYALBLUE2",           Rgb::new( 67, 110, 238)),
    ("ROYALBLUE3",           Rgb::new( 58,  95, 205)),
    ("ROYALBLUE4",           Rgb::new( 39,  64, 139)),
    ("SALMON",               Rgb::new(250, 128, 114)),
    ("SALMON1",              Rgb::new(255, 140, 105)),
    ("SALMON2",              Rgb::new(238, 130,  98)),
    ("SALMON3",              Rgb::new(205, 112,  84)),
    ("SALMON4",              Rgb::new(139,  76,  57)),
    ("SANDYBROWN",           Rgb::new(244, 164,  96)),
    ("SAPGREEN",             Rgb::new( 48, 128,  20)),
    ("SEAGREEN1",            Rgb::new( 84, 255, 159)),
    ("SEAGREEN2",            Rgb::new( 78, 238, 148)),
    ("SEAGREEN3",            Rgb::new( 67, 205, 128)),
    ("SEAGREEN4",            Rgb::new( 46, 139,  87)),
    ("SEASHELL1",            Rgb::new(255, 245, 238)),
    ("SEASHELL2",            Rgb::new(238, 229, 222)),
    ("SEASHELL3",            Rgb::new(205, 197, 191)),
    ("SEASHELL4",            Rgb::new(139, 134, 130)),
    ("SEPIA",                Rgb::new( 94,  38,  18)),
    ("SGIBEET",              Rgb::new(142,  56, 142)),
    ("SGIBRIGHTGRAY",        Rgb::new(197, 193, 170)),
    ("SGICHARTREUSE",        Rgb::new(113, 198, 113)),
    ("SGIDARKGRAY",          Rgb::new( 85,  85,  85)),
    ("SGIGRAY12",            Rgb::new( 30,  30,  30)),
    ("SGIGRAY16",            Rgb::new( 40,  40,  40)),
    ("SGIGRAY32",            Rgb::new( 81,  81,  81)),
    ("SGIGRAY36",            Rgb::new( 91,  91,  91)),
    ("SGIGRAY52",            Rgb::new(132, 132, 132)),
    ("SGIGRAY56",            Rgb::new(142, 142, 142)),
    ("SGIGRAY72",            Rgb::new(183, 183, 183)),
    ("SGIGRAY76",            Rgb::new(193, 193, 193)),
    ("SGIGRAY92",            Rgb::new(234, 234, 234)),
    ("SGIGRAY96",            Rgb::new(244, 244, 244)),
    ("SGILIGHTBLUE",         Rgb::new(125, 158, 192)),
    ("SGILIGHTGRAY",         Rgb::new(170, 170, 170)),
    ("SGIOLIVEDRAB",         Rgb::new(142, 142,  56)),
    ("SGISALMON",            Rgb::new(198, 113, 113)),
    ("SGISLATEBLUE",         Rgb::new(113, 113, 198)),
    ("SGITEAL",              Rgb::new( 56, 142, 142)),
    ("SIENNA",               Rgb::new(160,  82,  45)),
    ("SIENNA1",              Rgb::new(255, 130,  71)),
    ("SIENNA2",              Rgb::new(238, 121,  66)),
    ("SIENNA3",              Rgb::new(205, 104,  57)),
    ("SIENNA4",              Rgb::new(139,  71,  38)),
    ("SILVER",               Rgb::new(192, 192, 192)),
    ("SKYBLUE",              Rgb::new(135, 206, 235)),
    ("SKYBLUE1",             Rgb::new(135, 206, 255)),
    ("SKYBLUE2",             Rgb::new(126, 192, 238)),
    ("SKYBLUE3",             Rgb::new(108, 166, 205)),
    ("SKYBLUE4",             Rgb::new( 74, 112, 139)),
    ("SLATEBLUE",            Rgb::new(106,  90, 205)),
    ("SLATEBLUE1",           Rgb::new(131, 111, 255)),
    ("SLATEBLUE2",           Rgb::new(122, 103, 238)),
    ("SLATEBLUE3",           Rgb::new(105,  89, 205)),
    ("SLATEBLUE4",           Rgb::new( 71,  60, 139)),
    ("SLATEGRAY",            Rgb::new(112, 128, 144)),
    ("SLATEGRAY1",           Rgb::new(198, 226, 255)),
    ("SLATEGRAY2",           Rgb::new(185, 211, 238)),
    ("SLATEGRAY3",           Rgb::new(159, 182, 205)),
    ("SLATEGRAY4",           Rgb::new(108, 123, 139)),
    ("SNOW1",                Rgb::new(255, 250, 250)),
    ("SNOW2",                Rgb::new(238, 233, 233)),
    ("SNOW3",                Rgb::new(205, 201, 201)),
    ("SNOW4",                Rgb::new(139, 137, 137)),
    ("SPRINGGREEN",          Rgb::new(  0, 255, 127)),
    ("SPRINGGREEN1",         Rgb::new(  0, 238, 118)),
    ("SPRINGGREEN2",         Rgb::new(  0, 205, 102)),
    ("SPRINGGREEN3",         Rgb::new(  0, 139,  69)),
    ("STEELBLUE",            Rgb::new( 70, 130, 180)),
    ("STEELBLUE1",           Rgb::new( 99, 184, 255)),
    ("STEELBLUE2",           Rgb::new( 92, 172, 238)),
    ("STEELBLUE3",           Rgb::new( 79, 148, 205)),
    ("STEELBLUE4",           Rgb::new( 54, 100, 139)),
    ("TAN",                  Rgb::new(210, 180, 140)),
    ("TAN1",                 Rgb::new(255, 165,  79)),
    ("TAN2",                 Rgb::new(238, 154,  73)),
    ("TAN3",                 Rgb::new(205, 133,  63)),
    ("TAN4",                 Rgb::new(139,  90,  43)),
    ("TEAL",                 Rgb::new(  0, 128, 128)),
    ("THISTLE",              Rgb::new(216, 191, 216)),
    ("THISTLE1",             Rgb::new(255, 225, 255)),
    ("THISTLE2",             Rgb::new(238, 210, 238)),
    ("THISTLE3",             Rgb::new(205, 181, 205)),
    ("THISTLE4",             Rgb::new(139, 123, 139)),
    ("TOMATO1",              Rgb::new(255,  99,  71)),
    ("TOMATO2",              Rgb::new(238,  92,  66)),
    ("TOMATO3",              Rgb::new(205,  79,  57)),
    ("TOMATO4",              Rgb::new(139,  54,  38)),
    ("TURQUOISE",            Rgb::new( 64, 224, 208)),
    ("TURQUOISE1",           Rgb::new(  0, 245, 255)),
    ("TURQUOISE2",           Rgb::new(  0, 229, 238)),
    ("TURQUOISE3",           Rgb::new(  0, 197, 205)),
    ("TURQUOISE4",           Rgb::new(  0, 134, 139)),
    ("TURQUOISEBLUE",        Rgb::new(  0, 199, 140)),
    ("VIOLET",               Rgb::new(238, 130, 238)),
    ("VIOLETRED",            Rgb::new(208,  32, 144)),
    ("VIOLETRED1",           Rgb::new(255,  62, 150)),
    ("VIOLETRED2",           Rgb::new(238,  58, 140)),
    ("VIOLETRED3",           Rgb::new(205,  50, 120)),
    ("VIOLETRED4",           Rgb::new(139,  34,  82)),
    ("WARMGREY",             Rgb::new(128, 128, 105)),
    ("WHEAT",                Rgb::new(245, 222, 179)),
    ("WHEAT1",               Rgb::new(255, 231, 186)),
    ("WHEAT2",               Rgb::new(238, 216, 174)),
    ("WHEAT3",               Rgb::new(205, 186, 150)),
    ("WHEAT4",               Rgb::new(139, 126, 102)),
    ("WHITE",                Rgb::new(255, 255, 255)),
    ("WHITESMOKE",           Rgb::new(245, 245, 245)),
    ("YELLOW1",              Rgb::new(255, 255,   0)),
    ("YELLOW2",              Rgb::new(238, 238,   0)),
    ("YELLOW3",              Rgb::new(205, 205,   0)),
    ("YELLOW4",              Rgb::new(139, 139,   0)),
];

#[cfg(test)]
mod test {
    use super::{lookup, names, NAMED_COLORS};
    use crate::Rgb;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("ALICEBLUE"), Some(Rgb::new(240, 248, 255)));
        assert_eq!(lookup("BLACK"), Some(Rgb::new(0, 0, 0)));
        assert_eq!(lookup("BLUE4"), Some(Rgb::new(0, 0, 139)));
        assert_eq!(lookup("Black"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_last_binding_wins() {
        let bindings = NAMED_COLORS
            .iter()
            .filter(|(name, _)| *name == "INDIANRED")
            .map(|(_, rgb)| *rgb)
            .collect::<Vec<_>>();
        assert_eq!(bindings, vec![Rgb::new(176, 23, 31), Rgb::new(205, 92, 92)]);
        assert_eq!(lookup("INDIANRED"), Some(Rgb::new(205, 92, 92)));
        assert_eq!(lookup("INDIANRED1"), Some(Rgb::new(255, 106, 106)));
    }

    #[test]
    fn test_names() {
        assert_eq!(names().count(), NAMED_COLORS.len());
        assert!(NAMED_COLORS.len() > 500);
        assert!(names().all(|name| name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())));
    }
}
