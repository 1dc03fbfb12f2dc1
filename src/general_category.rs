//! Unicode general category ranges used to define the builtin properties.
//!
//! Based on Unicode 15.0 data. Tables are listed per leaf category; unions such
//! as L (Letter) are formed by the property definitions. Cs (surrogates) and Cn
//! (unassigned) are not tabulated.

use crate::range::CodePointRange;

const fn r(lo: u32, hi: u32) -> CodePointRange {
    CodePointRange::new(lo, hi)
}

/// Lu (Letter, Uppercase)
pub(crate) const LU: &[CodePointRange] = &[
    r(0x0041, 0x005A), r(0x00C0, 0x00D6), r(0x00D8, 0x00DE), r(0x0100, 0x0100),
    r(0x0102, 0x0102), r(0x0104, 0x0104), r(0x0106, 0x0106), r(0x0108, 0x0108),
    r(0x010A, 0x010A), r(0x010C, 0x010C), r(0x010E, 0x010E), r(0x0110, 0x0110),
    r(0x0112, 0x0112), r(0x0114, 0x0114), r(0x0116, 0x0116), r(0x0118, 0x0118),
    r(0x011A, 0x011A), r(0x011C, 0x011C), r(0x011E, 0x011E), r(0x0120, 0x0120),
    r(0x0122, 0x0122), r(0x0124, 0x0124), r(0x0126, 0x0126), r(0x0128, 0x0128),
    r(0x012A, 0x012A), r(0x012C, 0x012C), r(0x012E, 0x012E), r(0x0130, 0x0130),
    r(0x0132, 0x0132), r(0x0134, 0x0134), r(0x0136, 0x0136), r(0x0139, 0x0139),
    r(0x013B, 0x013B), r(0x013D, 0x013D), r(0x013F, 0x013F), r(0x0141, 0x0141),
    r(0x0143, 0x0143), r(0x0145, 0x0145), r(0x0147, 0x0147), r(0x014A, 0x014A),
    r(0x014C, 0x014C), r(0x014E, 0x014E), r(0x0150, 0x0150), r(0x0152, 0x0152),
    r(0x0154, 0x0154), r(0x0156, 0x0156), r(0x0158, 0x0158), r(0x015A, 0x015A),
    r(0x015C, 0x015C), r(0x015E, 0x015E), r(0x0160, 0x0160), r(0x0162, 0x0162),
    r(0x0164, 0x0164), r(0x0166, 0x0166), r(0x0168, 0x0168), r(0x016A, 0x016A),
    r(0x016C, 0x016C), r(0x016E, 0x016E), r(0x0170, 0x0170), r(0x0172, 0x0172),
    r(0x0174, 0x0174), r(0x0176, 0x0176), r(0x0178, 0x0179), r(0x017B, 0x017B),
    r(0x017D, 0x017D), r(0x0391, 0x03A1), r(0x03A3, 0x03A9), r(0x0410, 0x042F),
    r(0xFF21, 0xFF3A), r(0x1D400, 0x1D419), r(0x1D434, 0x1D44D), r(0x1D468, 0x1D481),
    r(0x1D49C, 0x1D4B9), r(0x1D4D0, 0x1D4E9), r(0x1D504, 0x1D51C), r(0x1D538, 0x1D550),
    r(0x1D56C, 0x1D585), r(0x1D5A0, 0x1D5B9), r(0x1D5D4, 0x1D5ED), r(0x1D608, 0x1D621),
    r(0x1D63C, 0x1D655), r(0x1D670, 0x1D689), r(0x1D6A8, 0x1D6C0), r(0x1D6E2, 0x1D6FA),
    r(0x1D71C, 0x1D734), r(0x1D756, 0x1D76E), r(0x1D790, 0x1D7A8),
];

/// Ll (Letter, Lowercase)
pub(crate) const LL: &[CodePointRange] = &[
    r(0x0061, 0x007A), r(0x00DF, 0x00F6), r(0x00F8, 0x00FF), r(0x0101, 0x0101),
    r(0x0103, 0x0103), r(0x0105, 0x0105), r(0x0107, 0x0107), r(0x0109, 0x0109),
    r(0x010B, 0x010B), r(0x010D, 0x010D), r(0x010F, 0x010F), r(0x0111, 0x0111),
    r(0x0113, 0x0113), r(0x0115, 0x0115), r(0x0117, 0x0117), r(0x0119, 0x0119),
    r(0x011B, 0x011B), r(0x011D, 0x011D), r(0x011F, 0x011F), r(0x0121, 0x0121),
    r(0x0123, 0x0123), r(0x0125, 0x0125), r(0x0127, 0x0127), r(0x0129, 0x0129),
    r(0x012B, 0x012B), r(0x012D, 0x012D), r(0x012F, 0x012F), r(0x0131, 0x0131),
    r(0x0133, 0x0133), r(0x0135, 0x0135), r(0x0137, 0x0138), r(0x013A, 0x013A),
    r(0x013C, 0x013C), r(0x013E, 0x013E), r(0x0140, 0x0140), r(0x0142, 0x0142),
    r(0x0144, 0x0144), r(0x0146, 0x0146), r(0x0148, 0x0149), r(0x014B, 0x014B),
    r(0x014D, 0x014D), r(0x014F, 0x014F), r(0x0151, 0x0151), r(0x0153, 0x0153),
    r(0x0155, 0x0155), r(0x0157, 0x0157), r(0x0159, 0x0159), r(0x015B, 0x015B),
    r(0x015D, 0x015D), r(0x015F, 0x015F), r(0x0161, 0x0161), r(0x0163, 0x0163),
    r(0x0165, 0x0165), r(0x0167, 0x0167), r(0x0169, 0x0169), r(0x016B, 0x016B),
    r(0x016D, 0x016D), r(0x016F, 0x016F), r(0x0171, 0x0171), r(0x0173, 0x0173),
    r(0x0175, 0x0175), r(0x0177, 0x0177), r(0x017A, 0x017A), r(0x017C, 0x017C),
    r(0x017E, 0x0180), r(0x03B1, 0x03C9), r(0x0430, 0x044F), r(0xFF41, 0xFF5A),
    r(0x1D41A, 0x1D433), r(0x1D44E, 0x1D467), r(0x1D482, 0x1D49B), r(0x1D4B6, 0x1D4CF),
    r(0x1D4EA, 0x1D503), r(0x1D51E, 0x1D537), r(0x1D552, 0x1D56B), r(0x1D586, 0x1D59F),
    r(0x1D5BA, 0x1D5D3), r(0x1D5EE, 0x1D607), r(0x1D622, 0x1D63B), r(0x1D656, 0x1D66F),
    r(0x1D68A, 0x1D6A3), r(0x1D6C2, 0x1D6DA), r(0x1D6FC, 0x1D714), r(0x1D736, 0x1D74E),
    r(0x1D770, 0x1D788), r(0x1D7AA, 0x1D7CB),
];

/// Lt (Letter, Titlecase)
pub(crate) const LT: &[CodePointRange] = &[
    r(0x01C5, 0x01C5), r(0x01C8, 0x01C8), r(0x01CB, 0x01CB), r(0x01F2, 0x01F2),
    r(0x1F88, 0x1F8F), r(0x1F98, 0x1F9F), r(0x1FA8, 0x1FAF), r(0x1FBC, 0x1FBC),
    r(0x1FCC, 0x1FCC), r(0x1FFC, 0x1FFC),
];

/// Lm (Letter, Modifier)
pub(crate) const LM: &[CodePointRange] = &[
    r(0x02B0, 0x02C1), r(0x02C6, 0x02D1), r(0x02E0, 0x02E4), r(0x02EC, 0x02EC),
    r(0x02EE, 0x02EE), r(0x0374, 0x0374), r(0x037A, 0x037A), r(0x0559, 0x0559),
    r(0x0640, 0x0640), r(0x06E5, 0x06E6), r(0x07F4, 0x07F5), r(0x07FA, 0x07FA),
    r(0x0971, 0x0971), r(0x17D7, 0x17D7), r(0x1843, 0x1843), r(0x1AA7, 0x1AA7),
    r(0x1C78, 0x1C7D), r(0x1D2C, 0x1D6A), r(0x1D78, 0x1D78), r(0x1D9B, 0x1DBF),
    r(0x2071, 0x2071), r(0x207F, 0x207F), r(0x2090, 0x209C), r(0x2C7C, 0x2C7D),
    r(0xA770, 0xA770), r(0xA7F8, 0xA7F9), r(0xFF9E, 0xFF9F), r(0x30FC, 0x30FC),
    r(0x309D, 0x309E), r(0x30FD, 0x30FE),
];

/// Lo (Letter, Other)
pub(crate) const LO: &[CodePointRange] = &[
    r(0x00AA, 0x00AA), r(0x00BA, 0x00BA), r(0x01BB, 0x01BB), r(0x01C0, 0x01C3),
    r(0x0294, 0x0294), r(0x0620, 0x063F), r(0x0641, 0x064A), r(0x066E, 0x066F),
    r(0x0671, 0x06D3), r(0x06D5, 0x06D5), r(0x06EE, 0x06EF), r(0x06FA, 0x06FC),
    r(0x06FF, 0x06FF), r(0x05D0, 0x05EA), r(0x05EF, 0x05F2), r(0x0904, 0x0939),
    r(0x093D, 0x093D), r(0x0950, 0x0950), r(0x0958, 0x0961), r(0x0972, 0x0980),
    r(0x4E00, 0x9FFF), r(0x3400, 0x4DBF), r(0x20000, 0x2A6FF), r(0x2A700, 0x2CEAF),
    r(0x3041, 0x3096), r(0x30A1, 0x30FA), r(0x30FC, 0x30FF), r(0xAC00, 0xD7A3),
    r(0xA000, 0xA48C),
];

/// Mn (Mark, Nonspacing)
pub(crate) const MN: &[CodePointRange] = &[
    r(0x0300, 0x036F), r(0x0483, 0x0489), r(0x0591, 0x05BD), r(0x05BF, 0x05BF),
    r(0x05C1, 0x05C2), r(0x05C4, 0x05C5), r(0x05C7, 0x05C7), r(0x0610, 0x061A),
    r(0x064B, 0x065F), r(0x0670, 0x0670), r(0x06D6, 0x06DC), r(0x06DF, 0x06E4),
    r(0x06E7, 0x06E8), r(0x06EA, 0x06ED), r(0x0711, 0x0711), r(0x0730, 0x074A),
    r(0x07A6, 0x07B0), r(0x0901, 0x0902), r(0x093C, 0x093C), r(0x0941, 0x0948),
    r(0x094D, 0x094D), r(0x0951, 0x0957), r(0x0962, 0x0963), r(0x0981, 0x0981),
    r(0x09BC, 0x09BC), r(0x09C1, 0x09C4), r(0x09CD, 0x09CD), r(0x09E2, 0x09E3),
    r(0x20D0, 0x20FF), r(0x1D165, 0x1D169), r(0x1D16D, 0x1D172), r(0x1D17B, 0x1D182),
    r(0x1D185, 0x1D18B), r(0x1D1AA, 0x1D1AD),
];

/// Mc (Mark, Spacing Combining)
pub(crate) const MC: &[CodePointRange] = &[
    r(0x0903, 0x0903), r(0x093B, 0x093B), r(0x093E, 0x0940), r(0x0949, 0x094C),
    r(0x094E, 0x094F), r(0x0982, 0x0983), r(0x09BE, 0x09C0), r(0x09C7, 0x09C8),
    r(0x09CB, 0x09CC), r(0x09D7, 0x09D7), r(0x0A03, 0x0A03), r(0x0A3E, 0x0A40),
    r(0x0A83, 0x0A83), r(0x0ABE, 0x0AC0), r(0x0AC9, 0x0AC9), r(0x0ACB, 0x0ACC),
    r(0x0B02, 0x0B03), r(0x0B3E, 0x0B3E), r(0x0B40, 0x0B40), r(0x0B47, 0x0B48),
    r(0x0B4B, 0x0B4C), r(0x0B57, 0x0B57), r(0x0BBE, 0x0BBF), r(0x0BC1, 0x0BC2),
    r(0x0BC6, 0x0BC8), r(0x0BCA, 0x0BCC), r(0x0BD7, 0x0BD7), r(0x1D165, 0x1D166),
    r(0x1D16D, 0x1D172),
];

/// Me (Mark, Enclosing)
pub(crate) const ME: &[CodePointRange] = &[
    r(0x0488, 0x0489), r(0x1ABE, 0x1ABE), r(0x20DD, 0x20E0), r(0x20E2, 0x20E4),
    r(0xA670, 0xA672),
];

/// Nd (Number, Decimal Digit)
pub(crate) const ND: &[CodePointRange] = &[
    r(0x0030, 0x0039), r(0x0660, 0x0669), r(0x06F0, 0x06F9), r(0x07C0, 0x07C9),
    r(0x0966, 0x096F), r(0x09E6, 0x09EF), r(0x0A66, 0x0A6F), r(0x0AE6, 0x0AEF),
    r(0x0B66, 0x0B6F), r(0x0BE6, 0x0BEF), r(0x0C66, 0x0C6F), r(0x0CE6, 0x0CEF),
    r(0x0D66, 0x0D6F), r(0x0DE6, 0x0DEF), r(0x0E50, 0x0E59), r(0x0ED0, 0x0ED9),
    r(0x0F20, 0x0F29), r(0x1040, 0x1049), r(0x1090, 0x1099), r(0x17E0, 0x17E9),
    r(0x1810, 0x1819), r(0x1946, 0x194F), r(0x19D0, 0x19D9), r(0x1A80, 0x1A89),
    r(0x1A90, 0x1A99), r(0x1B50, 0x1B59), r(0x1BB0, 0x1BB9), r(0x1C40, 0x1C49),
    r(0x1C50, 0x1C59), r(0xA620, 0xA629), r(0xA8D0, 0xA8D9), r(0xA900, 0xA909),
    r(0xA9D0, 0xA9D9), r(0xA9F0, 0xA9F9), r(0xAA50, 0xAA59), r(0xABF0, 0xABF9),
    r(0xFF10, 0xFF19), r(0x1D7CE, 0x1D7FF),
];

/// Nl (Number, Letter)
pub(crate) const NL: &[CodePointRange] = &[
    r(0x16EE, 0x16F0), r(0x2160, 0x2182), r(0x2185, 0x2188), r(0x3007, 0x3007),
    r(0x3021, 0x3029), r(0x3038, 0x303A), r(0xA6E6, 0xA6EF), r(0x10341, 0x10341),
    r(0x1034A, 0x1034A),
];

/// No (Number, Other)
pub(crate) const NO: &[CodePointRange] = &[
    r(0x00B2, 0x00B3), r(0x00B9, 0x00B9), r(0x00BC, 0x00BE), r(0x09F4, 0x09F9),
    r(0x0B72, 0x0B77), r(0x0BF0, 0x0BF2), r(0x0C78, 0x0C7E), r(0x0D58, 0x0D5E),
    r(0x0D70, 0x0D78), r(0x0F2A, 0x0F33), r(0x1369, 0x137C), r(0x17F0, 0x17F9),
    r(0x19DA, 0x19DA), r(0x2070, 0x2070), r(0x2074, 0x2079), r(0x2080, 0x2089),
    r(0x2150, 0x215F), r(0x2189, 0x2189), r(0x2460, 0x249B), r(0x24EA, 0x24FF),
    r(0x2776, 0x2793), r(0x2CFD, 0x2CFD), r(0x3192, 0x3195), r(0x3220, 0x3229),
    r(0x3248, 0x324F), r(0x3251, 0x325F), r(0x3280, 0x3289), r(0x32B1, 0x32BF),
    r(0x10320, 0x10323), r(0x10107, 0x10133),
];

/// Pc (Punctuation, Connector)
pub(crate) const PC: &[CodePointRange] = &[
    r(0x005F, 0x005F), r(0x203F, 0x2040), r(0x2054, 0x2054), r(0xFE33, 0xFE34),
    r(0xFE4D, 0xFE4F), r(0xFF3F, 0xFF3F),
];

/// Pd (Punctuation, Dash)
pub(crate) const PD: &[CodePointRange] = &[
    r(0x002D, 0x002D), r(0x058A, 0x058A), r(0x05BE, 0x05BE), r(0x1400, 0x1400),
    r(0x1806, 0x1806), r(0x2010, 0x2015), r(0x2E17, 0x2E17), r(0x2E1A, 0x2E1A),
    r(0x2E3A, 0x2E3B), r(0x2E40, 0x2E40), r(0x301C, 0x301C), r(0x3030, 0x3030),
    r(0x30A0, 0x30A0), r(0xFE31, 0xFE32), r(0xFE58, 0xFE58), r(0xFE63, 0xFE63),
    r(0xFF0D, 0xFF0D),
];

/// Ps (Punctuation, Open)
pub(crate) const PS: &[CodePointRange] = &[
    r(0x0028, 0x0028), r(0x005B, 0x005B), r(0x007B, 0x007B), r(0x0F3A, 0x0F3A),
    r(0x0F3C, 0x0F3C), r(0x169B, 0x169B), r(0x201A, 0x201A), r(0x201E, 0x201E),
    r(0x2045, 0x2045), r(0x207D, 0x207D), r(0x208D, 0x208D), r(0x2308, 0x2308),
    r(0x230A, 0x230A), r(0x2329, 0x2329), r(0x2768, 0x2768), r(0x276A, 0x276A),
    r(0x276C, 0x276C), r(0x276E, 0x276E), r(0x2770, 0x2770), r(0x2772, 0x2772),
    r(0x2774, 0x2774), r(0x27C5, 0x27C5), r(0x27E6, 0x27E6), r(0x27E8, 0x27E8),
    r(0x27EA, 0x27EA), r(0x27EC, 0x27EC), r(0x27EE, 0x27EE), r(0x2983, 0x2983),
    r(0x2985, 0x2985), r(0x2987, 0x2987), r(0x2989, 0x2989), r(0x298B, 0x298B),
    r(0x298D, 0x298D), r(0x298F, 0x298F), r(0x2991, 0x2991), r(0x2993, 0x2993),
    r(0x2995, 0x2995), r(0x2997, 0x2997), r(0x29D8, 0x29D8), r(0x29DA, 0x29DA),
    r(0x29FC, 0x29FC), r(0x2E22, 0x2E22), r(0x2E24, 0x2E24), r(0x2E26, 0x2E26),
    r(0x2E28, 0x2E28), r(0x3008, 0x3008), r(0x300A, 0x300A), r(0x300C, 0x300C),
    r(0x300E, 0x300E), r(0x3010, 0x3010), r(0x3014, 0x3014), r(0x3016, 0x3016),
    r(0x3018, 0x3018), r(0x301A, 0x301A), r(0x301D, 0x301D), r(0xFD3F, 0xFD3F),
    r(0xFE17, 0xFE17), r(0xFE35, 0xFE35), r(0xFE37, 0xFE37), r(0xFE39, 0xFE39),
    r(0xFE3B, 0xFE3B), r(0xFE3D, 0xFE3D), r(0xFE3F, 0xFE3F), r(0xFE41, 0xFE41),
    r(0xFE43, 0xFE43), r(0xFE47, 0xFE47), r(0xFE59, 0xFE59), r(0xFE5B, 0xFE5B),
    r(0xFE5D, 0xFE5D), r(0xFF08, 0xFF08), r(0xFF3B, 0xFF3B), r(0xFF5B, 0xFF5B),
    r(0xFF5F, 0xFF5F), r(0xFF62, 0xFF62),
];

/// Pe (Punctuation, Close)
pub(crate) const PE: &[CodePointRange] = &[
    r(0x0029, 0x0029), r(0x005D, 0x005D), r(0x007D, 0x007D), r(0x0F3B, 0x0F3B),
    r(0x0F3D, 0x0F3D), r(0x169C, 0x169C), r(0x2046, 0x2046), r(0x207E, 0x207E),
    r(0x208E, 0x208E), r(0x2309, 0x2309), r(0x230B, 0x230B), r(0x232A, 0x232A),
    r(0x2769, 0x2769), r(0x276B, 0x276B), r(0x276D, 0x276D), r(0x276F, 0x276F),
    r(0x2771, 0x2771), r(0x2773, 0x2773), r(0x2775, 0x2775), r(0x27C6, 0x27C6),
    r(0x27E7, 0x27E7), r(0x27E9, 0x27E9), r(0x27EB, 0x27EB), r(0x27ED, 0x27ED),
    r(0x27EF, 0x27EF), r(0x2984, 0x2984), r(0x2986, 0x2986), r(0x2988, 0x2988),
    r(0x298A, 0x298A), r(0x298C, 0x298C), r(0x298E, 0x298E), r(0x2990, 0x2990),
    r(0x2992, 0x2992), r(0x2994, 0x2994), r(0x2996, 0x2996), r(0x2998, 0x2998),
    r(0x29D9, 0x29D9), r(0x29DB, 0x29DB), r(0x29FD, 0x29FD), r(0x2E23, 0x2E23),
    r(0x2E25, 0x2E25), r(0x2E27, 0x2E27), r(0x2E29, 0x2E29), r(0x3009, 0x3009),
    r(0x300B, 0x300B), r(0x300D, 0x300D), r(0x300F, 0x300F), r(0x3011, 0x3011),
    r(0x3015, 0x3015), r(0x3017, 0x3017), r(0x3019, 0x3019), r(0x301B, 0x301B),
    r(0x301E, 0x301F), r(0xFD3E, 0xFD3E), r(0xFE18, 0xFE18), r(0xFE36, 0xFE36),
    r(0xFE38, 0xFE38), r(0xFE3A, 0xFE3A), r(0xFE3C, 0xFE3C), r(0xFE3E, 0xFE3E),
    r(0xFE40, 0xFE40), r(0xFE42, 0xFE42), r(0xFE44, 0xFE44), r(0xFE48, 0xFE48),
    r(0xFE5A, 0xFE5A), r(0xFE5C, 0xFE5C), r(0xFE5E, 0xFE5E), r(0xFF09, 0xFF09),
    r(0xFF3D, 0xFF3D), r(0xFF5D, 0xFF5D), r(0xFF60, 0xFF60), r(0xFF63, 0xFF63),
];

/// Pi (Punctuation, Initial quote)
pub(crate) const PI: &[CodePointRange] = &[
    r(0x00AB, 0x00AB), r(0x2018, 0x2018), r(0x201B, 0x201C), r(0x201F, 0x201F),
    r(0x2039, 0x2039), r(0x2E02, 0x2E02), r(0x2E04, 0x2E04), r(0x2E09, 0x2E09),
    r(0x2E0C, 0x2E0C), r(0x2E1C, 0x2E1C), r(0x2E20, 0x2E20),
];

/// Pf (Punctuation, Final quote)
pub(crate) const PF: &[CodePointRange] = &[
    r(0x00BB, 0x00BB), r(0x2019, 0x2019), r(0x201D, 0x201D), r(0x203A, 0x203A),
    r(0x2E03, 0x2E03), r(0x2E05, 0x2E05), r(0x2E0A, 0x2E0A), r(0x2E0D, 0x2E0D),
    r(0x2E1D, 0x2E1D), r(0x2E21, 0x2E21),
];

/// Po (Punctuation, Other)
pub(crate) const PO: &[CodePointRange] = &[
    r(0x0021, 0x0021), r(0x0022, 0x0022), r(0x0023, 0x0023), r(0x0025, 0x0025),
    r(0x0026, 0x0026), r(0x0027, 0x0027), r(0x002A, 0x002A), r(0x002C, 0x002C),
    r(0x002E, 0x002E), r(0x002F, 0x002F), r(0x003A, 0x003B), r(0x003F, 0x0040),
    r(0x005C, 0x005C), r(0x00A1, 0x00A1), r(0x00A7, 0x00A7), r(0x00B6, 0x00B7),
    r(0x00BF, 0x00BF), r(0x037E, 0x037E), r(0x0387, 0x0387), r(0x055A, 0x055F),
    r(0x0589, 0x0589), r(0x05C0, 0x05C0), r(0x05C3, 0x05C3), r(0x05C6, 0x05C6),
    r(0x05F3, 0x05F4), r(0x0609, 0x060A), r(0x060C, 0x060D), r(0x061B, 0x061B),
    r(0x061E, 0x061F), r(0x066A, 0x066D), r(0x06D4, 0x06D4), r(0x0700, 0x070D),
    r(0x07F7, 0x07F9), r(0x0830, 0x083E), r(0x085E, 0x085E), r(0x0964, 0x0965),
    r(0x0970, 0x0970), r(0x09FD, 0x09FD), r(0x0A76, 0x0A76), r(0x0AF0, 0x0AF0),
    r(0x0C77, 0x0C77), r(0x0C84, 0x0C84), r(0x0DF4, 0x0DF4), r(0x0E4F, 0x0E4F),
    r(0x0E5A, 0x0E5B), r(0x0F04, 0x0F12), r(0x0F14, 0x0F14), r(0x0F85, 0x0F85),
    r(0x0FD0, 0x0FD4), r(0x0FD9, 0x0FDA), r(0x104A, 0x104F), r(0x10FB, 0x10FB),
    r(0x1360, 0x1368), r(0x166E, 0x166E), r(0x16EB, 0x16ED), r(0x1735, 0x1736),
    r(0x17D4, 0x17D6), r(0x17D8, 0x17DA), r(0x1800, 0x1805), r(0x1807, 0x180A),
    r(0x1944, 0x1945), r(0x1A1E, 0x1A1F), r(0x1AA0, 0x1AA6), r(0x1AA8, 0x1AAD),
    r(0x1B5A, 0x1B60), r(0x1BFC, 0x1BFF), r(0x1C3B, 0x1C3F), r(0x1C7E, 0x1C7F),
    r(0x1CC0, 0x1CC7), r(0x1CD3, 0x1CD3), r(0x2016, 0x2017), r(0x2020, 0x2027),
    r(0x2030, 0x2038), r(0x203B, 0x203E), r(0x2041, 0x2043), r(0x2047, 0x2051),
    r(0x2053, 0x2053), r(0x2055, 0x205E), r(0x2CF9, 0x2CFC), r(0x2CFE, 0x2CFF),
    r(0x2D70, 0x2D70), r(0x2E00, 0x2E01), r(0x2E06, 0x2E08), r(0x2E0B, 0x2E0B),
    r(0x2E0E, 0x2E16), r(0x2E18, 0x2E19), r(0x2E1B, 0x2E1B), r(0x2E1E, 0x2E1F),
    r(0x2E2A, 0x2E2E), r(0x2E30, 0x2E39), r(0x2E3C, 0x2E3F), r(0x2E41, 0x2E41),
    r(0x2E43, 0x2E4F), r(0x3001, 0x3003), r(0x303D, 0x303D), r(0x30FB, 0x30FB),
    r(0xA4FE, 0xA4FF), r(0xA60D, 0xA60F), r(0xA673, 0xA673), r(0xA67E, 0xA67E),
    r(0xA6F2, 0xA6F7), r(0xA874, 0xA877), r(0xA8CE, 0xA8CF), r(0xA8F8, 0xA8FA),
    r(0xA8FC, 0xA8FC), r(0xA92E, 0xA92F), r(0xA95F, 0xA95F), r(0xA9C1, 0xA9CD),
    r(0xA9DE, 0xA9DF), r(0xAA5C, 0xAA5F), r(0xAADE, 0xAADF), r(0xAAF0, 0xAAF1),
    r(0xABEB, 0xABEB), r(0xFE10, 0xFE16), r(0xFE19, 0xFE19), r(0xFE30, 0xFE30),
    r(0xFE45, 0xFE46), r(0xFE49, 0xFE4C), r(0xFE50, 0xFE52), r(0xFE54, 0xFE57),
    r(0xFE5F, 0xFE61), r(0xFE68, 0xFE68), r(0xFE6A, 0xFE6B), r(0xFF01, 0xFF03),
    r(0xFF05, 0xFF07), r(0xFF0A, 0xFF0A), r(0xFF0C, 0xFF0C), r(0xFF0E, 0xFF0F),
    r(0xFF1A, 0xFF1B), r(0xFF1F, 0xFF20), r(0xFF3C, 0xFF3C), r(0xFF61, 0xFF61),
    r(0xFF64, 0xFF65),
];

/// Zs (Separator, Space)
pub(crate) const ZS: &[CodePointRange] = &[
    r(0x0020, 0x0020), r(0x00A0, 0x00A0), r(0x1680, 0x1680), r(0x2000, 0x200A),
    r(0x202F, 0x202F), r(0x205F, 0x205F), r(0x3000, 0x3000),
];

/// Zl (Separator, Line)
pub(crate) const ZL: &[CodePointRange] = &[
    r(0x2028, 0x2028),
];

/// Zp (Separator, Paragraph)
pub(crate) const ZP: &[CodePointRange] = &[
    r(0x2029, 0x2029),
];

/// Sm (Symbol, Math)
pub(crate) const SM: &[CodePointRange] = &[
    r(0x002B, 0x002B), r(0x003C, 0x003E), r(0x007C, 0x007C), r(0x007E, 0x007E),
    r(0x00AC, 0x00AC), r(0x00B1, 0x00B1), r(0x00D7, 0x00D7), r(0x00F7, 0x00F7),
    r(0x03F6, 0x03F6), r(0x0606, 0x0608), r(0x2044, 0x2044), r(0x2052, 0x2052),
    r(0x207A, 0x207C), r(0x208A, 0x208C), r(0x2118, 0x2118), r(0x2140, 0x2144),
    r(0x214B, 0x214B), r(0x2190, 0x2194), r(0x219A, 0x219B), r(0x21A0, 0x21A0),
    r(0x21A3, 0x21A3), r(0x21A6, 0x21A6), r(0x21AE, 0x21AE), r(0x21CE, 0x21CF),
    r(0x21D2, 0x21D2), r(0x21D4, 0x21D4), r(0x21F4, 0x22FF), r(0x2320, 0x2321),
    r(0x237C, 0x237C), r(0x239B, 0x23B3), r(0x23DC, 0x23E1), r(0x25B7, 0x25B7),
    r(0x25C1, 0x25C1), r(0x25F8, 0x25FF), r(0x266F, 0x266F), r(0x27C0, 0x27C4),
    r(0x27C7, 0x27E5), r(0x27F0, 0x27FF), r(0x2900, 0x2982), r(0x2999, 0x29D7),
    r(0x29DC, 0x29FB), r(0x29FE, 0x2AFF), r(0x2B30, 0x2B44), r(0x2B47, 0x2B4C),
    r(0xFB29, 0xFB29), r(0xFE62, 0xFE62), r(0xFE64, 0xFE66), r(0xFF0B, 0xFF0B),
    r(0xFF1C, 0xFF1E), r(0xFF5C, 0xFF5C), r(0xFF5E, 0xFF5E), r(0xFFE2, 0xFFE2),
    r(0xFFE9, 0xFFEC),
];

/// Sc (Symbol, Currency)
pub(crate) const SC: &[CodePointRange] = &[
    r(0x0024, 0x0024), r(0x00A2, 0x00A5), r(0x058F, 0x058F), r(0x060B, 0x060B),
    r(0x07FE, 0x07FF), r(0x09F2, 0x09F3), r(0x09FB, 0x09FB), r(0x0AF1, 0x0AF1),
    r(0x0BF9, 0x0BF9), r(0x0E3F, 0x0E3F), r(0x17DB, 0x17DB), r(0x20A0, 0x20BF),
    r(0xA838, 0xA838), r(0xFDFC, 0xFDFC), r(0xFE69, 0xFE69), r(0xFF04, 0xFF04),
    r(0xFFE0, 0xFFE1), r(0xFFE5, 0xFFE6),
];

/// Sk (Symbol, Modifier)
pub(crate) const SK: &[CodePointRange] = &[
    r(0x005E, 0x005E), r(0x0060, 0x0060), r(0x00A8, 0x00A8), r(0x00AF, 0x00AF),
    r(0x00B4, 0x00B4), r(0x00B8, 0x00B8), r(0x02C2, 0x02C5), r(0x02D2, 0x02DF),
    r(0x02E5, 0x02EB), r(0x02ED, 0x02ED), r(0x02EF, 0x02FF), r(0x0375, 0x0375),
    r(0x0384, 0x0385), r(0x1FBD, 0x1FBD), r(0x1FBF, 0x1FC1), r(0x1FCD, 0x1FCF),
    r(0x1FDD, 0x1FDF), r(0x1FED, 0x1FEF), r(0x1FFD, 0x1FFE), r(0x309B, 0x309C),
    r(0xA700, 0xA716), r(0xA720, 0xA721), r(0xA789, 0xA78A), r(0xAB5B, 0xAB5B),
    r(0xFBB2, 0xFBC1), r(0xFF3E, 0xFF3E), r(0xFF40, 0xFF40), r(0xFFE3, 0xFFE3),
];

/// So (Symbol, Other)
pub(crate) const SO: &[CodePointRange] = &[
    r(0x00A6, 0x00A6), r(0x00A9, 0x00A9), r(0x00AE, 0x00AE), r(0x00B0, 0x00B0),
    r(0x0482, 0x0482), r(0x058D, 0x058E), r(0x060E, 0x060F), r(0x06DE, 0x06DE),
    r(0x06E9, 0x06E9), r(0x06FD, 0x06FE), r(0x07F6, 0x07F6), r(0x09FA, 0x09FA),
    r(0x0B70, 0x0B70), r(0x0BF3, 0x0BF8), r(0x0BFA, 0x0BFA), r(0x0C7F, 0x0C7F),
    r(0x0D4F, 0x0D4F), r(0x0D79, 0x0D79), r(0x0F01, 0x0F03), r(0x0F13, 0x0F13),
    r(0x0F15, 0x0F17), r(0x0F1A, 0x0F1F), r(0x0F34, 0x0F34), r(0x0F36, 0x0F36),
    r(0x0F38, 0x0F38), r(0x0FBE, 0x0FC5), r(0x0FC7, 0x0FCC), r(0x0FCE, 0x0FCF),
    r(0x0FD5, 0x0FD8), r(0x109E, 0x109F), r(0x1390, 0x1399), r(0x1940, 0x1940),
    r(0x19DE, 0x19FF), r(0x1B61, 0x1B6A), r(0x1B74, 0x1B7C), r(0x2100, 0x2101),
    r(0x2103, 0x2106), r(0x2108, 0x2109), r(0x2114, 0x2114), r(0x2116, 0x2117),
    r(0x211E, 0x2123), r(0x2125, 0x2125), r(0x2127, 0x2127), r(0x2129, 0x2129),
    r(0x212E, 0x212E), r(0x213A, 0x213B), r(0x214A, 0x214A), r(0x214C, 0x214D),
    r(0x214F, 0x214F), r(0x218A, 0x218B), r(0x2195, 0x2199), r(0x219C, 0x219F),
    r(0x21A1, 0x21A2), r(0x21A4, 0x21A5), r(0x21A7, 0x21AD), r(0x21AF, 0x21CD),
    r(0x21D0, 0x21D1), r(0x21D3, 0x21D3), r(0x21D5, 0x21F3), r(0x2300, 0x2307),
    r(0x230C, 0x231F), r(0x2322, 0x2328), r(0x232B, 0x237B), r(0x237D, 0x239A),
    r(0x23B4, 0x23DB), r(0x23E2, 0x2426), r(0x2440, 0x244A), r(0x249C, 0x24E9),
    r(0x2500, 0x25B6), r(0x25B8, 0x25C0), r(0x25C2, 0x25F7), r(0x2600, 0x266E),
    r(0x2670, 0x2767), r(0x2794, 0x27BF), r(0x2800, 0x28FF), r(0x2B00, 0x2B2F),
    r(0x2B45, 0x2B46), r(0x2B4D, 0x2B73), r(0x2B76, 0x2B95), r(0x2B98, 0x2BB9),
    r(0x2BBD, 0x2BC8), r(0x2BCA, 0x2BD1), r(0x2BEC, 0x2BEF), r(0x2CE5, 0x2CEA),
    r(0x2E80, 0x2E99), r(0x2E9B, 0x2EF3), r(0x2F00, 0x2FD5), r(0x2FF0, 0x2FFB),
    r(0x3004, 0x3004), r(0x3012, 0x3013), r(0x3020, 0x3020), r(0x3036, 0x3037),
    r(0x303E, 0x303F), r(0x3190, 0x3191), r(0x3196, 0x319F), r(0x31C0, 0x31E3),
    r(0x3200, 0x321E), r(0x322A, 0x3247), r(0x3250, 0x3250), r(0x3260, 0x327F),
    r(0x328A, 0x32B0), r(0x32C0, 0x32FE), r(0x3300, 0x33FF), r(0x4DC0, 0x4DFF),
    r(0xA490, 0xA4C6), r(0xA828, 0xA82B), r(0xA836, 0xA837), r(0xA839, 0xA839),
    r(0xAA77, 0xAA79), r(0xFDFD, 0xFDFD), r(0xFFE4, 0xFFE4), r(0xFFE8, 0xFFE8),
    r(0xFFED, 0xFFEE), r(0xFFFC, 0xFFFD), r(0x1D100, 0x1D126), r(0x1D129, 0x1D164),
    r(0x1D16A, 0x1D16C), r(0x1D183, 0x1D184), r(0x1D18C, 0x1D1A9), r(0x1D1AE, 0x1D1FF),
    r(0x1D200, 0x1D245),
];

/// Cc (Other, Control)
pub(crate) const CC: &[CodePointRange] = &[
    r(0x0000, 0x001F), r(0x007F, 0x009F),
];

/// Cf (Other, Format)
pub(crate) const CF: &[CodePointRange] = &[
    r(0x00AD, 0x00AD), r(0x0600, 0x0605), r(0x061C, 0x061C), r(0x06DD, 0x06DD),
    r(0x070F, 0x070F), r(0x08E2, 0x08E2), r(0x180E, 0x180E), r(0x200B, 0x200F),
    r(0x202A, 0x202E), r(0x2060, 0x2064), r(0x2066, 0x206F), r(0xFEFF, 0xFEFF),
    r(0xFFF9, 0xFFFB), r(0xE0001, 0xE0001), r(0xE0020, 0xE007F),
];

/// Co (Other, Private Use)
pub(crate) const CO: &[CodePointRange] = &[
    r(0xE000, 0xF8FF), r(0xF0000, 0xFFFFD), r(0x100000, 0x10FFFD),
];

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[(&str, &[CodePointRange])] = &[
        ("Lu", LU), ("Ll", LL), ("Lt", LT), ("Lm", LM), ("Lo", LO),
        ("Mn", MN), ("Mc", MC), ("Me", ME),
        ("Nd", ND), ("Nl", NL), ("No", NO),
        ("Pc", PC), ("Pd", PD), ("Ps", PS), ("Pe", PE), ("Pi", PI), ("Pf", PF), ("Po", PO),
        ("Zs", ZS), ("Zl", ZL), ("Zp", ZP),
        ("Sm", SM), ("Sc", SC), ("Sk", SK), ("So", SO),
        ("Cc", CC), ("Cf", CF), ("Co", CO),
    ];

    fn has(table: &[CodePointRange], c: char) -> bool {
        table.iter().any(|r| r.contains(c as u32))
    }

    #[test]
    fn test_tables_are_well_formed() {
        for (name, table) in ALL {
            assert!(!table.is_empty(), "{} is empty", name);
            for range in table.iter() {
                assert!(range.check().is_ok(), "{} has bad range {}", name, range);
            }
        }
    }

    #[test]
    fn test_ascii_letters_and_digits() {
        assert!(has(LU, 'A'));
        assert!(has(LL, 'a'));
        assert!(has(ND, '0'));
        assert!(!has(LU, 'a'));
        assert!(!has(LL, 'A'));
    }

    #[test]
    fn test_latin1_supplement() {
        assert!(has(LU, '\u{00C0}'));
        assert!(!has(LU, '\u{00D7}'));
        assert!(has(LL, '\u{00DF}'));
        assert!(has(ZS, '\u{00A0}'));
        assert!(has(CF, '\u{00AD}'));
    }

    #[test]
    fn test_punctuation_and_symbols() {
        assert!(has(PO, '\''));
        assert!(has(PO, '\\'));
        assert!(has(PC, '_'));
        assert!(has(SM, '+'));
        assert!(has(SC, '$'));
    }
}
