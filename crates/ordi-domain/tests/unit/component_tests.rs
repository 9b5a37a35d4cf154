//! Unit tests for component construction and binding

use std::sync::Arc;

use ordi_domain::{Binds, Component, Result, ServiceResolver};

trait Named: Send + Sync {
    fn name(&self) -> String;
}

#[derive(Default)]
struct Widget {
    label: String,
}

impl Component for Widget {
    fn construct(_resolver: &dyn ServiceResolver) -> Result<Self> {
        Ok(Self {
            label: "widget".to_string(),
        })
    }
}

impl Named for Widget {
    fn name(&self) -> String {
        self.label.clone()
    }
}

ordi_domain::bind!(Widget => dyn Named);

#[test]
fn test_component_binds_to_itself() {
    let widget = Arc::new(Widget::default());
    let same: Arc<Widget> = <Widget as Binds<Widget>>::bind(Arc::clone(&widget));
    assert!(Arc::ptr_eq(&widget, &same));
}

#[test]
fn test_component_binds_to_trait_object() {
    let widget = Arc::new(Widget {
        label: "bound".to_string(),
    });
    let named: Arc<dyn Named> = <Widget as Binds<dyn Named>>::bind(widget);
    assert_eq!(named.name(), "bound");
}
