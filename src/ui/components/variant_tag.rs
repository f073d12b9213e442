use dioxus::prelude::*;

use crate::domain::ShoeVariant;
use crate::ui::theme;

/// Label and color classes for a variant's corner tag. `Default` gets no
/// tag at all; the match is exhaustive, so a future variant without a
/// style fails to compile instead of rendering blank.
pub fn tag_style(variant: ShoeVariant) -> Option<(&'static str, &'static str)> {
    match variant {
        ShoeVariant::OnSale => Some(("Sale", theme::tag_on_sale())),
        ShoeVariant::NewRelease => Some(("Just Released!", theme::tag_new_release())),
        ShoeVariant::Default => None,
    }
}

#[component]
pub fn VariantTag(variant: ShoeVariant) -> Element {
    let Some((label, color)) = tag_style(variant) else {
        return rsx! { Fragment {} };
    };

    rsx! {
        span {
            class: "{theme::tag_base()} {color}",
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_sale_tag_reads_sale() {
        let (label, color) = tag_style(ShoeVariant::OnSale).unwrap();
        assert_eq!(label, "Sale");
        assert!(color.contains("rose"));
    }

    #[test]
    fn new_release_tag_reads_just_released() {
        let (label, color) = tag_style(ShoeVariant::NewRelease).unwrap();
        assert_eq!(label, "Just Released!");
        assert!(color.contains("indigo"));
    }

    #[test]
    fn default_variant_gets_no_tag() {
        assert!(tag_style(ShoeVariant::Default).is_none());
    }
}
