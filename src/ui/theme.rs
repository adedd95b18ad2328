//! Tone-specific style helpers shared by pages and components.
//!
//! `Light` is used for the white input cards, `Dark` for the indigo
//! concession panel and the slate summary header.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Light,
    Dark,
}

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "rounded-2xl bg-indigo-900 px-5 py-2.5 text-sm font-bold text-white shadow-lg hover:bg-indigo-800 transition-all"
}

pub fn btn_soft() -> &'static str {
    "flex items-center gap-2 rounded-2xl bg-indigo-50 px-5 py-2.5 text-sm font-bold text-indigo-700 hover:bg-indigo-100 transition-all"
}

pub fn btn_icon() -> &'static str {
    "rounded-xl bg-indigo-50 p-2 text-indigo-600 hover:bg-indigo-600 hover:text-white transition-all"
}

pub fn btn_toggle(active: bool) -> &'static str {
    if active {
        "flex-1 rounded-xl px-4 py-2.5 text-xs font-black bg-indigo-900 text-white shadow-lg transition-all"
    } else {
        "flex-1 rounded-xl px-4 py-2.5 text-xs font-black text-indigo-400 hover:text-indigo-600 transition-all"
    }
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "rounded-xl px-4 py-2 text-sm font-bold bg-indigo-900 text-white"
    } else {
        "rounded-xl px-4 py-2 text-sm font-bold text-indigo-400 hover:bg-indigo-50 hover:text-indigo-700 transition-all"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Light => "w-full rounded-2xl border border-indigo-100 bg-indigo-50/30 py-3.5 pl-8 pr-4 font-bold text-indigo-900 focus:bg-white focus:outline-none focus:ring-2 focus:ring-indigo-600 transition-all",
        Tone::Dark => "w-full rounded-2xl border border-white/20 bg-white/5 py-3.5 pl-8 pr-4 font-bold text-white focus:border-white focus:outline-none transition-all",
    }
}

pub fn input_small() -> &'static str {
    "flex-1 rounded-xl border border-indigo-100 bg-indigo-50/30 px-3 py-2.5 text-sm text-indigo-900 placeholder:text-indigo-300 focus:bg-white focus:outline-none focus:ring-2 focus:ring-indigo-500 transition-all"
}

pub fn input_amount() -> &'static str {
    "w-full rounded-xl border border-indigo-100 bg-indigo-50/30 py-2.5 pl-7 pr-3 text-right text-sm font-medium text-indigo-900 focus:bg-white focus:outline-none focus:ring-2 focus:ring-indigo-500 transition-all"
}

// ============================================
// PANEL / CONTAINER STYLES
// ============================================

pub fn panel(tone: Tone) -> &'static str {
    match tone {
        Tone::Light => "rounded-[2.5rem] border border-indigo-50 bg-white p-10 shadow-sm",
        Tone::Dark => "relative overflow-hidden rounded-[2.5rem] bg-indigo-900 p-10 text-white shadow-xl",
    }
}

pub fn card() -> &'static str {
    "rounded-2xl border border-indigo-100 bg-white p-6 shadow-sm transition-all hover:border-indigo-200 hover:shadow-md"
}

pub fn table_container() -> &'static str {
    "overflow-hidden rounded-2xl border border-indigo-100 bg-white"
}

pub fn table_header() -> &'static str {
    "border-b border-indigo-100 bg-indigo-50/60 text-xs uppercase text-indigo-400"
}

pub fn table_divider() -> &'static str {
    "divide-y divide-indigo-50"
}

// ============================================
// TEXT STYLES
// ============================================

pub fn section_title(tone: Tone) -> &'static str {
    match tone {
        Tone::Light => "text-2xl font-black text-indigo-950",
        Tone::Dark => "text-2xl font-black text-white",
    }
}

pub fn label_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Light => "mb-3 flex items-center gap-2 text-xs font-black uppercase tracking-widest text-indigo-400",
        Tone::Dark => "text-[10px] font-black uppercase tracking-widest text-indigo-300",
    }
}

pub fn text_muted(tone: Tone) -> &'static str {
    match tone {
        Tone::Light => "text-indigo-300",
        Tone::Dark => "text-slate-400",
    }
}

pub fn currency_prefix(tone: Tone) -> &'static str {
    match tone {
        Tone::Light => "absolute left-3 top-1/2 -translate-y-1/2 text-sm font-bold text-indigo-400",
        Tone::Dark => "absolute left-3 top-1/2 -translate-y-1/2 text-sm font-bold text-indigo-200",
    }
}
