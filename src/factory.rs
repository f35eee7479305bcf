//! Factory Method variants over a small product family.
//!
//! A family of product types shares the [`Product`] interface; each variant
//! below answers "who decides which concrete product gets built" a different
//! way:
//!
//! 1. A creator trait whose hook is **required** — every implementor names
//!    its product.
//! 2. A creator trait that ships a **stock implementation** — implementors
//!    may override it or take the default.
//! 3. A **generic creator** parameterized by the product type itself.
//! 4. A **parameterised function** keyed by a product kind, with a custom
//!    variant that overrides one kind and delegates the rest.

use std::marker::PhantomData;

/// Interface shared by the product family. Products identify themselves by
/// label; callers decide what to do with it.
pub trait Product {
    fn label(&self) -> &'static str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Widget;

#[derive(Debug, Default, Clone, Copy)]
pub struct Gadget;

/// Replacement product used by the overriding creators.
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomWidget;

impl Product for Widget {
    fn label(&self) -> &'static str {
        "Widget"
    }
}

impl Product for Gadget {
    fn label(&self) -> &'static str {
        "Gadget"
    }
}

impl Product for CustomWidget {
    fn label(&self) -> &'static str {
        "CustomWidget"
    }
}

/// Variant 1: the creation hook is required.
pub trait Creator {
    fn create(&self) -> Box<dyn Product>;
}

pub struct WidgetCreator;

impl Creator for WidgetCreator {
    fn create(&self) -> Box<dyn Product> {
        Box::new(Widget)
    }
}

/// Variant 2: the trait ships a stock implementation, so an implementor
/// only overrides the hook when it wants a different product.
pub trait CreatorWithDefault {
    fn create(&self) -> Box<dyn Product> {
        Box::new(Widget)
    }
}

/// Takes the stock hook as-is.
pub struct StockCreator;

impl CreatorWithDefault for StockCreator {}

/// Overrides the stock hook.
pub struct GadgetCreator;

impl CreatorWithDefault for GadgetCreator {
    fn create(&self) -> Box<dyn Product> {
        Box::new(Gadget)
    }
}

/// Variant 3: one creator type handles any default-constructible product.
pub struct GenericCreator<P> {
    _marker: PhantomData<P>,
}

impl<P> GenericCreator<P> {
    pub fn new() -> Self {
        GenericCreator {
            _marker: PhantomData,
        }
    }
}

impl<P> Default for GenericCreator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Product + Default + 'static> Creator for GenericCreator<P> {
    fn create(&self) -> Box<dyn Product> {
        Box::new(P::default())
    }
}

/// Identifies a concrete product for the parameterised variants.
///
/// The enum is closed, so an unknown kind is unrepresentable and the
/// creation functions are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProductKind {
    Widget,
    Gadget,
}

crate::impl_to_underlying!(ProductKind, u8);

/// Variant 4: a parameterised creation function.
pub fn create(kind: ProductKind) -> Box<dyn Product> {
    match kind {
        ProductKind::Widget => Box::new(Widget),
        ProductKind::Gadget => Box::new(Gadget),
    }
}

/// A custom creation function: overrides one kind, delegates the rest.
pub fn create_custom(kind: ProductKind) -> Box<dyn Product> {
    match kind {
        ProductKind::Widget => Box::new(CustomWidget),
        other => create(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_hook_creator() {
        assert_eq!(WidgetCreator.create().label(), "Widget");
    }

    #[test]
    fn stock_hook_and_override() {
        assert_eq!(StockCreator.create().label(), "Widget");
        assert_eq!(GadgetCreator.create().label(), "Gadget");
    }

    #[test]
    fn generic_creator_builds_its_parameter() {
        let ca: GenericCreator<Widget> = GenericCreator::new();
        let cb: GenericCreator<Gadget> = GenericCreator::new();
        assert_eq!(ca.create().label(), "Widget");
        assert_eq!(cb.create().label(), "Gadget");
    }

    #[test]
    fn parameterised_function_is_total() {
        assert_eq!(create(ProductKind::Widget).label(), "Widget");
        assert_eq!(create(ProductKind::Gadget).label(), "Gadget");
    }

    #[test]
    fn custom_function_overrides_and_delegates() {
        assert_eq!(create_custom(ProductKind::Widget).label(), "CustomWidget");
        assert_eq!(create_custom(ProductKind::Gadget).label(), "Gadget");
    }

    #[test]
    fn creators_share_one_interface() {
        let creators: Vec<Box<dyn Creator>> = vec![
            Box::new(WidgetCreator),
            Box::new(GenericCreator::<Gadget>::new()),
        ];
        let labels: Vec<&str> = creators.iter().map(|c| c.create().label()).collect();
        assert_eq!(labels, vec!["Widget", "Gadget"]);
    }
}
