use crate::models::{Catalog, Intent, Product};
use crate::services::classifier::{classify, detect_bulk_quantity};

/// Find the first catalog product whose name appears in the transcript.
/// Catalog row order breaks ties; there is no fuzzy matching.
pub fn detect_product<'a>(transcript: &str, catalog: &'a Catalog) -> Option<&'a Product> {
    let text = transcript.to_lowercase();
    catalog
        .products()
        .iter()
        .find(|p| text.contains(p.name.as_str()))
}

/// Turn a transcript into the spoken FAQ answer. Returns the intent the
/// reply actually serves, which downgrades to `HumanNeeded` when a product
/// question names no known product.
///
/// The intent is re-derived from the transcript here instead of being
/// passed in. The orchestrator classifies once for routing and this
/// function classifies again; both must run the same rules, and taking a
/// tag as a parameter would let them drift apart.
pub fn compose(transcript: &str, catalog: &Catalog) -> (Intent, String) {
    let intent = classify(transcript);

    if intent == Intent::OrderStatus {
        return (intent, "I can help you check your order status.".to_string());
    }

    // Bulk interest is answered without a product; the lead details are
    // collected by a human afterwards.
    if intent == Intent::BulkOrder {
        let reply = match detect_bulk_quantity(transcript) {
            Some(qty) => format!(
                "Great! You are interested in ordering {qty} pieces. Our team will \
                 contact you shortly with pricing and delivery details for bulk orders."
            ),
            None => "Great! You are interested in bulk orders. Our team will contact \
                     you shortly with wholesale pricing and delivery details."
                .to_string(),
        };
        return (intent, reply);
    }

    let Some(product) = detect_product(transcript, catalog) else {
        return (
            Intent::HumanNeeded,
            "Hello, please tell me which product you are interested in and I will \
             give you the exact details."
                .to_string(),
        );
    };

    let name = &product.name;
    let reply = match intent {
        Intent::Price => {
            if !product.price.is_empty() {
                format!(
                    "Our {name} is priced at rupees {}. Available sizes are {}.",
                    product.price, product.sizes
                )
            } else {
                format!("Sorry, I don't have pricing information for {name} right now.")
            }
        }
        Intent::Size => {
            if !product.sizes.is_empty() {
                format!(
                    "Our {name} is available in sizes {}. Price: rupees {}.",
                    product.sizes, product.price
                )
            } else {
                format!("Sorry, I don't have size information for {name} right now.")
            }
        }
        Intent::Availability => {
            if !product.availability.is_empty() {
                format!(
                    "Yes, {name} is {}. Price: rupees {}, Sizes: {}.",
                    product.availability, product.price, product.sizes
                )
            } else {
                format!("Let me check the availability of {name} for you.")
            }
        }
        Intent::Color => {
            if !product.colors.is_empty() {
                format!(
                    "Our {name} is available in {}. Price: rupees {}.",
                    product.colors, product.price
                )
            } else {
                format!("Sorry, I don't have color information for {name} right now.")
            }
        }
        Intent::Delivery => {
            if !product.delivery.is_empty() {
                format!(
                    "Our {name} will be delivered in {}. Price: rupees {}.",
                    product.delivery, product.price
                )
            } else {
                format!("Typical delivery time is 3 to 5 days for {name}.")
            }
        }
        Intent::Material => {
            if !product.material.is_empty() {
                format!(
                    "Our {name} is made of {}. Price: rupees {}.",
                    product.material, product.price
                )
            } else {
                format!("Sorry, I don't have material information for {name} right now.")
            }
        }
        // Only HumanNeeded reaches here; the caller named a product but not
        // what they want to know about it.
        _ => format!(
            "I can help you with information about {name}. What would you like to \
             know - price, sizes, colors, or delivery time?"
        ),
    };

    (intent, reply)
}
