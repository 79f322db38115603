//! `<cloud>` element wrapper for the rssCloud update notification interface.

use crate::xml::ElementView;

#[derive(Debug, Clone)]
pub struct Cloud {
    elem: ElementView,
}

impl Cloud {
    pub(crate) fn new(elem: ElementView) -> Cloud {
        Cloud { elem }
    }

    pub fn is_null(&self) -> bool {
        self.elem.is_null()
    }

    pub fn domain(&self) -> String {
        self.elem.attribute("domain", "")
    }

    /// TCP port of the notification endpoint, `0` when missing or invalid.
    pub fn port(&self) -> i32 {
        self.elem.attribute("port", "").parse().unwrap_or(0)
    }

    pub fn path(&self) -> String {
        self.elem.attribute("path", "")
    }

    pub fn register_procedure(&self) -> String {
        self.elem.attribute("registerProcedure", "")
    }

    pub fn protocol(&self) -> String {
        self.elem.attribute("protocol", "")
    }
}
