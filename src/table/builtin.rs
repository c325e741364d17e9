//! The built-in symbol table
//!
//! References:
//! - <https://en.wikipedia.org/wiki/Mathematical_operators_and_symbols_in_Unicode>
//! - <https://en.wikipedia.org/wiki/Glossary_of_mathematical_symbols>
//! - <https://mathworld.wolfram.com/Doublestruck.html>
//! - <http://xahlee.info/comp/unicode_math_operators.html>
//! - <https://unicode-table.com/en/sets/superscript-and-subscript-letters/>
//! - <https://github.com/fKunstner/latex-to-utf8/blob/master/map.js>

use super::{CategoryDef, SymbolDef as S};

/// Every built-in category, in iteration order
pub static BUILTIN: &[CategoryDef] = &[
    CategoryDef { name: "greek_letters", symbols: GREEK_LETTERS },
    CategoryDef { name: "subscripts", symbols: SUBSCRIPTS },
    CategoryDef { name: "superscripts", symbols: SUPERSCRIPTS },
    CategoryDef { name: "quantifiers", symbols: QUANTIFIERS },
    CategoryDef { name: "numeric_sets", symbols: NUMERIC_SETS },
    CategoryDef { name: "set_operators", symbols: SET_OPERATORS },
    CategoryDef { name: "relational", symbols: RELATIONAL },
    CategoryDef { name: "numeric_operators", symbols: NUMERIC_OPERATORS },
    CategoryDef { name: "other_operators", symbols: OTHER_OPERATORS },
    CategoryDef { name: "nary", symbols: NARY },
    CategoryDef { name: "arrows", symbols: ARROWS },
    CategoryDef { name: "logic", symbols: LOGIC },
    CategoryDef { name: "calculus", symbols: CALCULUS },
    CategoryDef { name: "proof", symbols: PROOF },
    CategoryDef { name: "nesting", symbols: NESTING },
    CategoryDef { name: "misc", symbols: MISC },
    CategoryDef { name: "transfinite", symbols: TRANSFINITE },
];

#[rustfmt::skip]
const GREEK_LETTERS: &[S] = &[
    S::new('α', "alpha", "GREEK SMALL LETTER ALPHA", r"\alpha"),
    S::new('β', "beta", "GREEK SMALL LETTER BETA", r"\beta"),
    S::new('γ', "gamma", "GREEK SMALL LETTER GAMMA", r"\gamma"),
    S::new('δ', "delta", "GREEK SMALL LETTER DELTA", r"\delta"),
    S::new('ε', "epsilon", "GREEK SMALL LETTER EPSILON", r"\epsilon"),
    S::new('ζ', "zeta", "GREEK SMALL LETTER ZETA", r"\zeta"),
    S::new('η', "eta", "GREEK SMALL LETTER ETA", r"\eta"),
    S::new('θ', "theta", "GREEK SMALL LETTER THETA", r"\theta"),
    S::new('ι', "iota", "GREEK SMALL LETTER IOTA", r"\iota"),
    S::new('κ', "kappa", "GREEK SMALL LETTER KAPPA", r"\kappa"),
    S::new('λ', "lam", "GREEK SMALL LETTER LAMDA", r"\lambda"),
    S::new('μ', "mu", "GREEK SMALL LETTER MU", r"\mu"),
    S::new('ν', "nu", "GREEK SMALL LETTER NU", r"\nu"),
    S::new('ξ', "xi", "GREEK SMALL LETTER XI", r"\xi"),
    S::new('ο', "omicron", "GREEK SMALL LETTER OMICRON", r"\omicron"),
    S::new('π', "pi", "GREEK SMALL LETTER PI", r"\pi"),
    S::new('ρ', "rho", "GREEK SMALL LETTER RHO", r"\rho"),
    S::new('σ', "sigma", "GREEK SMALL LETTER SIGMA", r"\sigma"),
    S::new('τ', "tau", "GREEK SMALL LETTER TAU", r"\tau"),
    S::new('υ', "upsilon", "GREEK SMALL LETTER UPSILON", r"\upsilon"),
    S::new('φ', "phi", "GREEK SMALL LETTER PHI", r"\varphi"),
    S::new('χ', "chi", "GREEK SMALL LETTER CHI", r"\chi"),
    S::new('ψ', "psi", "GREEK SMALL LETTER PSI", r"\psi"),
    S::new('ω', "omega", "GREEK SMALL LETTER OMEGA", r"\omega"),

    S::new('Α', "Alpha", "GREEK CAPITAL LETTER ALPHA", r"\Alpha"),
    S::new('Β', "Beta", "GREEK CAPITAL LETTER BETA", r"\Beta"),
    S::new('Γ', "Gamma", "GREEK CAPITAL LETTER GAMMA", r"\Gamma"),
    S::new('Δ', "Delta", "GREEK CAPITAL LETTER DELTA", r"\Delta"),
    S::new('Ε', "Epsilon", "GREEK CAPITAL LETTER EPSILON", r"\Epsilon"),
    S::new('Ζ', "Zeta", "GREEK CAPITAL LETTER ZETA", r"\Zeta"),
    S::new('Η', "Eta", "GREEK CAPITAL LETTER ETA", r"\Eta"),
    S::new('Θ', "Theta", "GREEK CAPITAL LETTER THETA", r"\Theta"),
    S::new('Ι', "Iota", "GREEK CAPITAL LETTER IOTA", r"\Iota"),
    S::new('Κ', "Kappa", "GREEK CAPITAL LETTER KAPPA", r"\Kappa"),
    S::new('Λ', "Lambda", "GREEK CAPITAL LETTER LAMDA", r"\Lambda"),
    S::new('Μ', "Mu", "GREEK CAPITAL LETTER MU", r"\Mu"),
    S::new('Ν', "Nu", "GREEK CAPITAL LETTER NU", r"\Nu"),
    S::new('Ξ', "Xi", "GREEK CAPITAL LETTER XI", r"\Xi"),
    S::new('Ο', "Omicron", "GREEK CAPITAL LETTER OMICRON", r"\Omicron"),
    S::new('Π', "Pi", "GREEK CAPITAL LETTER PI", r"\Pi"),
    S::new('Ρ', "Rho", "GREEK CAPITAL LETTER RHO", r"\Rho"),
    S::new('Σ', "Sigma", "GREEK CAPITAL LETTER SIGMA", r"\Sigma"),
    S::new('Τ', "Tau", "GREEK CAPITAL LETTER TAU", r"\Tau"),
    S::new('Υ', "Upsilon", "GREEK CAPITAL LETTER UPSILON", r"\Upsilon"),
    S::new('Φ', "Phi", "GREEK CAPITAL LETTER PHI", r"\Phi"),
    S::new('Χ', "Chi", "GREEK CAPITAL LETTER CHI", r"\Chi"),
    S::new('Ψ', "Psi", "GREEK CAPITAL LETTER PSI", r"\Psi"),
    S::new('Ω', "Omega", "GREEK CAPITAL LETTER OMEGA", r"\Omega"),

    S::new('ς', "alt_sigma", "GREEK SMALL LETTER FINAL SIGMA", r"\upvarsigma"),
    S::new('𝜏', "alt_tau", "MATHEMATICAL ITALIC SMALL TAU", r"\mittau"),
];

#[rustfmt::skip]
const SUBSCRIPTS: &[S] = &[
    S::new('₀', "sub_0", "SUBSCRIPT ZERO", "_0"),
    S::new('₁', "sub_1", "SUBSCRIPT ONE", "_1"),
    S::new('₂', "sub_2", "SUBSCRIPT TWO", "_2"),
    S::new('₃', "sub_3", "SUBSCRIPT THREE", "_3"),
    S::new('₄', "sub_4", "SUBSCRIPT FOUR", "_4"),
    S::new('₅', "sub_5", "SUBSCRIPT FIVE", "_5"),
    S::new('₆', "sub_6", "SUBSCRIPT SIX", "_6"),
    S::new('₇', "sub_7", "SUBSCRIPT SEVEN", "_7"),
    S::new('₈', "sub_8", "SUBSCRIPT EIGHT", "_8"),
    S::new('₉', "sub_9", "SUBSCRIPT NINE", "_9"),

    S::new('₊', "sub_plus", "SUBSCRIPT PLUS SIGN", "_+"),
    S::new('₋', "sub_minus", "SUBSCRIPT MINUS", "_-"),
    S::new('₌', "sub_eq", "SUBSCRIPT EQUALS SIGN", "_="),

    S::new('₍', "sub_lparen", "SUBSCRIPT LEFT PARENTHESIS", "_("),
    S::new('₎', "sub_rparen", "SUBSCRIPT RIGHT PARENTHESIS", "_)"),

    S::new('ᵢ', "sub_i", "LATIN SUBSCRIPT SMALL LETTER I", "_i"),
    S::new('ᵣ', "sub_r", "LATIN SUBSCRIPT SMALL LETTER R", "_r"),
    S::new('ᵤ', "sub_u", "LATIN SUBSCRIPT SMALL LETTER U", "_u"),
    S::new('ᵥ', "sub_v", "LATIN SUBSCRIPT SMALL LETTER V", "_v"),

    S::new('ₐ', "sub_a", "LATIN SUBSCRIPT SMALL LETTER A", "_a"),
    S::new('ₑ', "sub_e", "LATIN SUBSCRIPT SMALL LETTER E", "_e"),
    S::new('ₒ', "sub_o", "LATIN SUBSCRIPT SMALL LETTER O", "_o"),
    S::new('ₓ', "sub_x", "LATIN SUBSCRIPT SMALL LETTER X", "_x"),
    S::new('ₕ', "sub_h", "LATIN SUBSCRIPT SMALL LETTER H", "_h"),
    S::new('ₖ', "sub_k", "LATIN SUBSCRIPT SMALL LETTER K", "_k"),
    S::new('ₗ', "sub_l", "LATIN SUBSCRIPT SMALL LETTER L", "_l"),
    S::new('ₘ', "sub_m", "LATIN SUBSCRIPT SMALL LETTER M", "_m"),
    S::new('ₙ', "sub_n", "LATIN SUBSCRIPT SMALL LETTER N", "_n"),
    S::new('ₚ', "sub_p", "LATIN SUBSCRIPT SMALL LETTER P", "_p"),
    S::new('ₛ', "sub_s", "LATIN SUBSCRIPT SMALL LETTER S", "_s"),
    S::new('ₜ', "sub_t", "LATIN SUBSCRIPT SMALL LETTER T", "_t"),
    S::new('ⱼ', "sub_j", "LATIN SUBSCRIPT SMALL LETTER J", "_j"),
    S::new('ᵦ', "sub_beta", "GREEK SUBSCRIPT SMALL LETTER BETA", r"_\beta"),
    S::new('ᵧ', "sub_gamma", "GREEK SUBSCRIPT SMALL LETTER GAMMA", r"_\gamma"),
    S::new('ᵨ', "sub_rho", "GREEK SUBSCRIPT SMALL LETTER RHO", r"_\rho"),
    S::new('ᵩ', "sub_phi", "GREEK SUBSCRIPT SMALL LETTER PHI", r"_\phi"),
    S::new('ᵪ', "sub_chi", "GREEK SUBSCRIPT SMALL LETTER CHI", r"_\chi"),

    S::new('⨧', "plus_with_sub_2", "PLUS SIGN WITH SUBSCRIPT TWO", r"\plussubtwo"),
];

#[rustfmt::skip]
const SUPERSCRIPTS: &[S] = &[
    S::new('⁰', "sup_0", "SUPERSCRIPT ZERO", "^0"),
    S::new('¹', "sup_1", "SUPERSCRIPT ONE", "^1"),
    S::new('²', "sup_2", "SUPERSCRIPT TWO", "^2"),
    S::new('³', "sup_3", "SUPERSCRIPT THREE", "^3"),
    S::new('⁴', "sup_4", "SUPERSCRIPT FOUR", "^4"),
    S::new('⁵', "sup_5", "SUPERSCRIPT FIVE", "^5"),
    S::new('⁶', "sup_6", "SUPERSCRIPT SIX", "^6"),
    S::new('⁷', "sup_7", "SUPERSCRIPT SEVEN", "^7"),
    S::new('⁸', "sup_8", "SUPERSCRIPT EIGHT", "^8"),
    S::new('⁹', "sup_9", "SUPERSCRIPT NINE", "^9"),
    S::new('⁺', "sup_plus", "SUPERSCRIPT PLUS SIGN", "^+"),
    S::new('⁻', "sup_minus", "SUPERSCRIPT MINUS", "^-"),
    S::new('⁼', "sup_eq", "SUPERSCRIPT EQUALS SIGN", "^="),
    S::new('⁽', "sup_lparen", "SUPERSCRIPT LEFT PARENTHESIS", "^("),
    S::new('⁾', "sup_rparen", "SUPERSCRIPT RIGHT PARENTHESIS", "^)"),
    S::new('ⁿ', "sup_n", "SUPERSCRIPT LATIN SMALL LETTER N", "^n"),
    S::new('ⁱ', "sup_i", "SUPERSCRIPT LATIN SMALL LETTER I", "^i"),
];

#[rustfmt::skip]
const QUANTIFIERS: &[S] = &[
    S::new('∈', "elementof", "ELEMENT OF", r"\in"),
    S::new('∉', "not_elementof", "NOT AN ELEMENT OF", r"\notin"),
    S::new('∀', "forall", "FOR ALL", r"\forall"),
    S::new('∃', "exists", "THERE EXISTS", r"\exists"),
    S::new('∄', "not_exists", "THERE DOES NOT EXIST", r"\nexists"),
];

#[rustfmt::skip]
const NUMERIC_SETS: &[S] = &[
    S::new('𝔽', "finitefield", "MATHEMATICAL DOUBLE-STRUCK CAPITAL F", r"\mathbb{F}"),
    S::new('ℕ', "natural", "DOUBLE-STRUCK CAPITAL N", r"\mathbb{N}"),
    S::new('ℚ', "rational", "DOUBLE-STRUCK CAPITAL Q", r"\mathbb{Q}"),
    S::new('ℂ', "complex", "DOUBLE-STRUCK CAPITAL C", r"\mathbb{C}"),
    S::new('ℍ', "quaternion", "DOUBLE-STRUCK CAPITAL H", r"\mathbb{H}"),
    S::new('𝕆', "octernion", "MATHEMATICAL DOUBLE-STRUCK CAPITAL O", r"\mathbb{O}"),
    S::new('ℙ', "irrational", "DOUBLE-STRUCK CAPITAL P", r"\mathbb{P}"),
    S::new('ℝ', "real", "DOUBLE-STRUCK CAPITAL R", r"\mathbb{R}"),
    S::new('ℤ', "integer", "DOUBLE-STRUCK CAPITAL Z", r"\mathbb{Z}"),
    S::new('𝕋', "trigintaduonion", "MATHEMATICAL DOUBLE-STRUCK CAPITAL T", r"\mathbb{T}"),
    S::new('𝟙', "ones", "MATHEMATICAL DOUBLE-STRUCK DIGIT ONE", r"\mathbb{1}"),
    S::new('∅', "emptyset", "EMPTY SET", r"\varnothing"),
];

#[rustfmt::skip]
const SET_OPERATORS: &[S] = &[
    S::new('∖', "setdiff", "SET MINUS", r"\smallsetminus"),
    S::new('⊂', "subset", "SUBSET OF", r"\subset"),
    S::new('⊃', "supset", "SUPERSET OF", r"\supset"),
    S::new('⊆', "subset_eq", "SUBSET OF OR EQUAL TO", r"\subseteq"),
    S::new('⊇', "supset_eq", "SUPERSET OF OR EQUAL TO", r"\supseteq"),
    S::new('⊊', "subset_neq", "SUBSET OF WITH NOT EQUAL TO", r"\subsetneq"),
    S::new('⊋', "supset_neq", "SUPERSET OF WITH NOT EQUAL TO", r"\supsetneq"),
    S::new('∩', "isect", "INTERSECTION", r"\cap").aliases(&["cup"]),
    S::new('∪', "union", "UNION", r"\cup").aliases(&["cap"]),

    S::new('⊉', "subset_not_ge", "NEITHER A SUPERSET OF NOR EQUAL TO", r"\nsupseteq"),
    S::new('⊅', "subset_not_gt", "NOT A SUPERSET OF", r"\nsupset"),
    S::new('⊄', "subset_not_lt", "NOT A SUBSET OF", r"\nsubset"),
    S::new('⊈', "subset_not_le", "NEITHER A SUBSET OF NOR EQUAL TO", r"\nsubseteq"),
];

#[rustfmt::skip]
const RELATIONAL: &[S] = &[
    S::new('≤', "le", "LESS-THAN OR EQUAL TO", r"\leq"),
    S::new('≥', "ge", "GREATER-THAN OR EQUAL TO", r"\geq"),
    S::new('<', "lt", "LESS-THAN SIGN", "<"),
    S::new('>', "gt", "GREATER-THAN SIGN", ">"),
    S::plain('=', "eq", "EQUALS SIGN"),
    S::new('≠', "ne", "NOT EQUAL TO", r"\neq"),
    S::new('≈', "approx_eq", "ALMOST EQUAL TO", r"\approx"),
    S::new('≇', "not_approx", "NEITHER APPROXIMATELY NOR ACTUALLY EQUAL TO", r"\ncong"),
    S::new('≆', "approx_ne", "APPROXIMATELY BUT NOT ACTUALLY EQUAL TO", r"\simneqq"),
    S::new('∝', "propor", "PROPORTIONAL TO", r"\propto"),
    S::new('≡', "equiv", "IDENTICAL TO", r"\equiv"),
    S::new('≢', "not_equiv", "NOT IDENTICAL TO", r"\nequiv"),
    S::new('≅', "cong", "APPROXIMATELY EQUAL TO", r"\cong"),
    S::new('≔', "doteq", "COLON EQUALS", r"\coloneq"),
    S::new('≕', "eqdot", "EQUALS COLON", r"\eqcolon"),
];

#[rustfmt::skip]
const NUMERIC_OPERATORS: &[S] = &[
    S::new('±', "pm", "PLUS-MINUS SIGN", r"\pm"),
    S::new('√', "square_root", "SQUARE ROOT", r"\sqrt"),
    S::new('∛', "cube_root", "CUBE ROOT", r"\sqrt[3]"),
    S::new('∜', "quad_root", "FOURTH ROOT", r"\sqrt[4]"),
];

#[rustfmt::skip]
const OTHER_OPERATORS: &[S] = &[
    S::new('⋅', "cdot", "DOT OPERATOR", r"\cdot"),
    S::new('∘', "circ", "RING OPERATOR", r"\circ"),
    S::new('×', "times", "MULTIPLICATION SIGN", r"\times"),
    S::new('⊕', "oplus", "CIRCLED PLUS", r"\oplus"),
];

#[rustfmt::skip]
const NARY: &[S] = &[
    S::new('∏', "nary_prod", "N-ARY PRODUCT", r"\prod"),
    S::new('∑', "nary_sum", "N-ARY SUMMATION", r"\sum"),
    S::new('⋂', "nary_isect", "N-ARY INTERSECTION", r"\bigcap"),
    S::new('⋃', "nary_union", "N-ARY UNION", r"\bigcup"),
];

#[rustfmt::skip]
const ARROWS: &[S] = &[
    S::new('→', "right_arrow", "RIGHTWARDS ARROW", r"\rightarrow").aliases(&["to"]),
    S::new('←', "left_arrow", "LEFTWARDS ARROW", r"\leftarrow"),
    S::new('↔', "bidir_arrow", "LEFT RIGHT ARROW", r"\leftrightarrow"),
    S::new('⇒', "right_darrow", "RIGHTWARDS DOUBLE ARROW", r"\Rightarrow"),
    S::new('⇐', "left_darrow", "LEFTWARDS DOUBLE ARROW", r"\Leftarrow"),
    S::new('⇔', "bidir_darrow", "LEFT RIGHT DOUBLE ARROW", r"\Leftrightarrow"),
];

#[rustfmt::skip]
const LOGIC: &[S] = &[
    S::new('∧', "and", "LOGICAL AND", r"\wedge"),
    S::new('∨', "or", "LOGICAL OR", r"\vee"),
    S::new('¬', "not", "NOT SIGN", r"\neg"),
];

#[rustfmt::skip]
const CALCULUS: &[S] = &[
    S::new('∫', "integral", "INTEGRAL", r"\int"),
    S::new('∂', "partial", "PARTIAL DIFFERENTIAL", r"\partial"),
    S::new('∆', "delta_upper", "INCREMENT", r"\increment"),
    S::new('∇', "nabla", "NABLA", r"\varnabla")
        .aliases(&["del", "gradient"])
        .references(&["https://en.wikipedia.org/wiki/Del"]),
];

#[rustfmt::skip]
const PROOF: &[S] = &[
    S::new('∴', "therefore", "THEREFORE", r"\therefore"),
    S::new('∎', "qed", "END OF PROOF", r"\QED"),
];

#[rustfmt::skip]
const NESTING: &[S] = &[
    S::new('⟨', "langle", "MATHEMATICAL LEFT ANGLE BRACKET", r"\langle"),
    S::new('⟩', "rangle", "MATHEMATICAL RIGHT ANGLE BRACKET", r"\rangle"),
];

#[rustfmt::skip]
const MISC: &[S] = &[
    S::new('⊥', "perp", "UP TACK", r"\bot"),
    S::new('⊢', "yields", "RIGHT TACK", r"\vdash")
        .references(&["https://en.wikipedia.org/wiki/Turnstile_(symbol)"]),
    S::new('⊨', "satisfies", "TRUE", r"\vDash")
        .references(&["https://en.wikipedia.org/wiki/Double_turnstile"]),
    S::new('…', "ldots", "HORIZONTAL ELLIPSIS", r"\ldots"),
    S::new('⋯', "cdots", "MIDLINE HORIZONTAL ELLIPSIS", r"\cdots"),
    S::new('⋈', "join", "BOWTIE", r"\bowtie"),
    S::new('≦', "leqq", "LESS-THAN OVER EQUAL TO", r"\leqq"),
    S::new('≧', "geqq", "GREATER-THAN OVER EQUAL TO", r"\geqq"),
];

#[rustfmt::skip]
const TRANSFINITE: &[S] = &[
    S::new('∞', "infinity", "INFINITY", r"\infty").aliases(&["infty"]),
    S::new('ℵ', "aleph", "ALEF SYMBOL", r"\aleph"),
    S::new('ℶ', "beth", "BET SYMBOL", r"\beth").aliases(&["bet"]),
];
