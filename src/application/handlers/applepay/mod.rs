//! Apple Pay shipping negotiation handlers.

mod shipping_contact;
mod shipping_method;

pub use shipping_contact::{ShippingContactCommand, ShippingContactHandler};
pub use shipping_method::{ShippingMethodCommand, ShippingMethodHandler};

#[cfg(test)]
pub(crate) mod test_support {
    //! Recording pricing adapter shared by the handler tests.

    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::domain::applepay::{
        LineItem, MoneyTotal, ShippingContact, ShippingMethodOption, ShippingMethodSelection,
    };
    use crate::ports::{QuotePricingAdapter, QuotePricingError};

    #[derive(Debug, Clone, PartialEq)]
    pub enum PricingCall {
        SetDestination(ShippingContact),
        ShippingMethods,
        SetShippingMethod(ShippingMethodSelection),
        GrandTotal,
        LineItems,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FailPoint {
        SetDestination,
        ShippingMethods,
        SetShippingMethod,
        GrandTotal,
    }

    pub struct MockQuotePricing {
        calls: Mutex<Vec<PricingCall>>,
        methods: Vec<ShippingMethodOption>,
        total: MoneyTotal,
        line_items: Vec<LineItem>,
        failure: Option<(FailPoint, QuotePricingError)>,
    }

    impl MockQuotePricing {
        pub fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                methods: Vec::new(),
                total: MoneyTotal::zero(),
                line_items: Vec::new(),
                failure: None,
            }
        }

        pub fn with_methods(mut self, methods: Vec<ShippingMethodOption>) -> Self {
            self.methods = methods;
            self
        }

        pub fn with_total(mut self, total: MoneyTotal) -> Self {
            self.total = total;
            self
        }

        pub fn with_line_items(mut self, line_items: Vec<LineItem>) -> Self {
            self.line_items = line_items;
            self
        }

        pub fn failing_at(mut self, point: FailPoint, error: QuotePricingError) -> Self {
            self.failure = Some((point, error));
            self
        }

        pub fn calls(&self) -> Vec<PricingCall> {
            self.calls.lock().unwrap().clone()
        }

        pub fn method_selections(&self) -> Vec<ShippingMethodSelection> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    PricingCall::SetShippingMethod(selection) => Some(selection),
                    _ => None,
                })
                .collect()
        }

        fn record(&self, call: PricingCall, point: Option<FailPoint>) -> Result<(), QuotePricingError> {
            self.calls.lock().unwrap().push(call);
            match (&self.failure, point) {
                (Some((fail_at, error)), Some(point)) if *fail_at == point => Err(error.clone()),
                _ => Ok(()),
            }
        }
    }

    #[async_trait]
    impl QuotePricingAdapter for MockQuotePricing {
        async fn set_destination(&self, contact: &ShippingContact) -> Result<(), QuotePricingError> {
            self.record(
                PricingCall::SetDestination(contact.clone()),
                Some(FailPoint::SetDestination),
            )
        }

        async fn shipping_methods(&self) -> Result<Vec<ShippingMethodOption>, QuotePricingError> {
            self.record(PricingCall::ShippingMethods, Some(FailPoint::ShippingMethods))?;
            Ok(self.methods.clone())
        }

        async fn set_shipping_method(
            &self,
            selection: &ShippingMethodSelection,
        ) -> Result<(), QuotePricingError> {
            self.record(
                PricingCall::SetShippingMethod(selection.clone()),
                Some(FailPoint::SetShippingMethod),
            )
        }

        async fn grand_total(&self) -> Result<MoneyTotal, QuotePricingError> {
            self.record(PricingCall::GrandTotal, Some(FailPoint::GrandTotal))?;
            Ok(self.total.clone())
        }

        async fn line_items(&self) -> Result<Vec<LineItem>, QuotePricingError> {
            self.record(PricingCall::LineItems, None)?;
            Ok(self.line_items.clone())
        }
    }
}
