//! Polymorphic deep copy through a trait object.
//!
//! `Clone` is not object-safe, so a boxed trait object cannot be cloned
//! directly. The pattern: the trait carries an object-safe `clone_box` hook
//! returning `Box<dyn Element>`, each concrete type implements it by cloning
//! itself, and `Clone for Box<dyn Element>` delegates to the hook. Calling
//! `clone()` on the concrete type still yields the fully typed value — the
//! concrete clone stays as specific as its receiver.

/// A drawable element that can duplicate itself behind a trait object.
pub trait Element {
    fn label(&self) -> &'static str;

    /// Deep copy, erased to the trait object.
    fn clone_box(&self) -> Box<dyn Element>;
}

impl Clone for Box<dyn Element> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: u32,
}

impl Element for Circle {
    fn label(&self) -> &'static str {
        "Circle"
    }

    fn clone_box(&self) -> Box<dyn Element> {
        Box::new(self.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    pub side: u32,
}

impl Element for Square {
    fn label(&self) -> &'static str {
        "Square"
    }

    fn clone_box(&self) -> Box<dyn Element> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_clone_keeps_its_type() {
        let c1 = Circle { radius: 3 };
        let c2: Circle = c1.clone();
        assert_eq!(c1, c2);
    }

    #[test]
    fn boxed_clone_is_deep() {
        let original: Box<dyn Element> = Box::new(Square { side: 4 });
        let copy = original.clone();
        assert_eq!(copy.label(), "Square");
        // Distinct allocations behind the two boxes.
        assert!(!std::ptr::eq(
            original.as_ref() as *const dyn Element as *const u8,
            copy.as_ref() as *const dyn Element as *const u8,
        ));
    }

    #[test]
    fn mixed_elements_clone_through_the_trait() {
        let scene: Vec<Box<dyn Element>> = vec![
            Box::new(Circle { radius: 1 }),
            Box::new(Square { side: 2 }),
        ];
        let copy = scene.clone();
        let labels: Vec<&str> = copy.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Circle", "Square"]);
    }
}
