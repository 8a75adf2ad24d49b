//! The client side of the Abstract Factory pattern.

use tracing::{debug, instrument};

use crate::factory::ArtSupplyFactory;

/// An artist who works with whatever supplies a factory provides.
///
/// The factory is injected at construction and bound for the client's
/// lifetime; the client never learns the concrete factory type, only the
/// [`ArtSupplyFactory`] capability. Swapping the professional factory for the
/// beginner one, or for the mock, requires no change here.
///
/// # Example
///
/// ```
/// use art_supply_recipe::clients::ArtistClient;
/// use art_supply_recipe::factory::BeginnerArtSupplyFactory;
///
/// let client = ArtistClient::new(BeginnerArtSupplyFactory);
/// client.create_art();
/// ```
pub struct ArtistClient {
    factory: Box<dyn ArtSupplyFactory>,
}

impl ArtistClient {
    /// Creates a client bound to the given factory.
    pub fn new(factory: impl ArtSupplyFactory + 'static) -> Self {
        Self {
            factory: Box::new(factory),
        }
    }

    /// Obtains one easel and one paint from the factory and exercises both,
    /// easel first. Emits the two product descriptions on stdout, in order.
    #[instrument(skip(self), fields(family = self.factory.family()))]
    pub fn create_art(&self) {
        debug!("requesting supplies");
        let easel = self.factory.create_easel();
        let paint = self.factory.create_paint();

        easel.use_easel();
        paint.apply();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{
        BeginnerArtSupplyFactory, MockArtSupplyFactory, ProfessionalArtSupplyFactory,
    };
    use crate::products::{Easel, Paint};

    #[test]
    fn client_accepts_any_factory_without_changes() {
        // Same client code, three different factories.
        ArtistClient::new(ProfessionalArtSupplyFactory).create_art();
        ArtistClient::new(BeginnerArtSupplyFactory).create_art();
        ArtistClient::new(MockArtSupplyFactory).create_art();
    }

    #[test]
    fn create_art_exercises_easel_before_paint() {
        use std::sync::{Arc, Mutex};

        // Products that log instead of printing, so the call order is
        // observable without capturing stdout.
        struct RecordingFactory {
            log: Arc<Mutex<Vec<&'static str>>>,
        }
        impl ArtSupplyFactory for RecordingFactory {
            fn create_easel(&self) -> Box<dyn Easel> {
                #[derive(Debug)]
                struct RecordingEasel(Arc<Mutex<Vec<&'static str>>>);
                impl Easel for RecordingEasel {
                    fn description(&self) -> &'static str {
                        "recording easel"
                    }
                    fn use_easel(&self) {
                        self.0.lock().unwrap().push("easel");
                    }
                }
                Box::new(RecordingEasel(Arc::clone(&self.log)))
            }
            fn create_paint(&self) -> Box<dyn Paint> {
                struct RecordingPaint(Arc<Mutex<Vec<&'static str>>>);
                impl Paint for RecordingPaint {
                    fn description(&self) -> &'static str {
                        "recording paint"
                    }
                    fn apply(&self) {
                        self.0.lock().unwrap().push("paint");
                    }
                }
                Box::new(RecordingPaint(Arc::clone(&self.log)))
            }
            fn family(&self) -> &'static str {
                "recording"
            }
        }

        let log = Arc::new(Mutex::new(Vec::new()));
        let client = ArtistClient::new(RecordingFactory {
            log: Arc::clone(&log),
        });

        client.create_art();

        // The easel is always exercised before the paint.
        assert_eq!(*log.lock().unwrap(), ["easel", "paint"]);
    }

    #[test]
    fn client_accepts_an_anonymous_factory() {
        // The capability is the whole contract; a one-off local factory works
        // exactly like the shipping ones.
        struct FineLinerFactory;
        impl ArtSupplyFactory for FineLinerFactory {
            fn create_easel(&self) -> Box<dyn Easel> {
                #[derive(Debug)]
                struct DeskEasel;
                impl Easel for DeskEasel {
                    fn description(&self) -> &'static str {
                        "desk easel"
                    }
                }
                Box::new(DeskEasel)
            }
            fn create_paint(&self) -> Box<dyn Paint> {
                struct InkPaint;
                impl Paint for InkPaint {
                    fn description(&self) -> &'static str {
                        "ink"
                    }
                }
                Box::new(InkPaint)
            }
            fn family(&self) -> &'static str {
                "fine-liner"
            }
        }

        ArtistClient::new(FineLinerFactory).create_art();
    }
}
