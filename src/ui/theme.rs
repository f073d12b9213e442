//! Shared class-string helpers so pages and components stay consistent.

// ============================================
// BUTTON STYLES
// ============================================

pub fn filter_btn_active() -> &'static str {
    "rounded-lg px-4 py-2 text-sm font-semibold bg-rose-500/20 text-rose-300 border border-rose-500/40"
}

pub fn filter_btn_inactive() -> &'static str {
    "rounded-lg px-4 py-2 text-sm text-slate-400 border border-slate-700 transition hover:border-rose-600 hover:text-rose-300"
}

pub fn sort_btn(active: bool) -> &'static str {
    if active {
        "rounded-md border border-indigo-500/60 bg-indigo-500/15 px-2 py-1 text-[11px] font-semibold text-indigo-100"
    } else {
        "rounded-md border border-slate-800 px-2 py-1 text-[11px] text-slate-400 transition hover:border-slate-600 hover:text-slate-200"
    }
}

// ============================================
// CARD STYLES
// ============================================

pub fn card_link() -> &'static str {
    "block min-w-[280px] flex-1 text-inherit no-underline"
}

pub fn card_image() -> &'static str {
    "w-full rounded-xl border border-slate-800 bg-slate-900/60"
}

pub fn card_name() -> &'static str {
    "font-medium text-slate-100"
}

/// Base price styling; struck through and muted while a sale runs.
pub fn card_price(on_sale: bool) -> &'static str {
    if on_sale {
        "text-slate-500 line-through"
    } else {
        "text-slate-100"
    }
}

pub fn card_color_info() -> &'static str {
    "text-slate-500"
}

pub fn card_sale_price() -> &'static str {
    "font-medium text-rose-400"
}

// ============================================
// TAG STYLES
// ============================================

pub fn tag_base() -> &'static str {
    "absolute right-[-4px] top-3 rounded-sm px-2 py-1 text-xs font-semibold text-white"
}

pub fn tag_on_sale() -> &'static str {
    "bg-rose-600"
}

pub fn tag_new_release() -> &'static str {
    "bg-indigo-500"
}

// ============================================
// PANEL / TEXT STYLES
// ============================================

pub fn panel_border() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn empty_state() -> &'static str {
    "px-4 py-6 text-sm text-slate-500"
}
