//! Integration with `miette`, so fault trees can be wrapped in a
//! [`miette::Report`] by drivers that present diagnostics that way.

use miette::Diagnostic;

use crate::outcome::Fault;

// FIXME: surface Located line numbers as miette labels once faults carry
// the source text they point into.

impl Diagnostic for Fault {
    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn related<'a>(&'a self) -> Option<Box<dyn Iterator<Item = &'a dyn Diagnostic> + 'a>> {
        match self {
            Fault::Aggregate { causes, .. } => {
                Some(Box::new(causes.iter().map(|cause| cause as &dyn Diagnostic)))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use miette::Diagnostic;

    use crate::outcome::{aggregate, Fault};

    #[test]
    fn aggregate_causes_become_related_diagnostics() {
        let fault = aggregate(
            [
                Err(Fault::message("first")),
                Ok(()),
                Err(Fault::message("second")),
            ],
            "building pages",
        )
        .unwrap_err();

        let related = fault.related().expect("aggregates have related diagnostics");
        assert_eq!(related.count(), 2);
        assert_eq!(fault.severity(), Some(miette::Severity::Error));
    }

    #[test]
    fn leaves_have_no_related_diagnostics() {
        assert!(Fault::message("boom").related().is_none());
    }
}
