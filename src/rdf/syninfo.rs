//! Syndication module view (`sy:` update hints).

use std::rc::Rc;

use crate::rdf::model::Model;
use crate::rdf::vocab;
use crate::util::dates::{DateFormat, parse_date};

/// How often a feed claims to update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdatePeriod {
    Hourly,
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl UpdatePeriod {
    fn from_str(s: &str) -> UpdatePeriod {
        match s {
            "hourly" => UpdatePeriod::Hourly,
            "weekly" => UpdatePeriod::Weekly,
            "monthly" => UpdatePeriod::Monthly,
            "yearly" => UpdatePeriod::Yearly,
            _ => UpdatePeriod::Daily,
        }
    }
}

/// Read access to the syndication module properties of a channel.
#[derive(Debug, Clone)]
pub struct SyndicationInfo {
    model: Rc<Model>,
    subject: String,
}

impl SyndicationInfo {
    pub(crate) fn new(model: Rc<Model>, subject: String) -> SyndicationInfo {
        SyndicationInfo { model, subject }
    }

    fn text(&self, term: &str) -> String {
        self.model.property_text(&self.subject, &vocab::syndication(term))
    }

    pub fn update_period(&self) -> UpdatePeriod {
        UpdatePeriod::from_str(self.text("updatePeriod").trim())
    }

    /// Updates per period; defaults to 1 when absent or unparseable.
    pub fn update_frequency(&self) -> i32 {
        let raw = self.text("updateFrequency");
        if raw.trim().is_empty() {
            return 1;
        }
        raw.trim().parse().unwrap_or(1)
    }

    /// Base timestamp the update schedule counts from, `0` when absent.
    pub fn update_base(&self) -> i64 {
        parse_date(&self.text("updateBase"), DateFormat::Iso)
    }
}
