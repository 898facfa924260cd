mod linear;
mod symbol;

pub use symbol::{Module, RowHeight, Symbol, DEFAULT_HEIGHT, QUIET_ZONE};

use tracing::{debug, info};

use crate::common::{
    error::EanResult,
    metadata::{EncodeOptions, Symbology},
    normalize::normalize,
};
use linear::{append_addon, draw_primary};

pub struct EanBuilder<'a> {
    data: &'a [u8],
    symbology: Symbology,
    addon_gap: Option<u8>,
    check_digit: bool,
    composite: bool,
}

impl<'a> EanBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, symbology: Symbology::Ean, addon_gap: None, check_digit: false, composite: false }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = data;
        self
    }

    pub fn symbology(&mut self, symbology: Symbology) -> &mut Self {
        self.symbology = symbology;
        self
    }

    pub fn addon_gap(&mut self, gap: u8) -> &mut Self {
        self.addon_gap = Some(gap);
        self
    }

    pub fn unset_addon_gap(&mut self) -> &mut Self {
        self.addon_gap = None;
        self
    }

    /// Expect the caller to supply the check digit.
    pub fn check_digit(&mut self, check_digit: bool) -> &mut Self {
        self.check_digit = check_digit;
        self
    }

    /// Link the symbol to a 2D composite component.
    pub fn composite(&mut self, composite: bool) -> &mut Self {
        self.composite = composite;
        self
    }

    pub fn options(&mut self, options: &EncodeOptions) -> &mut Self {
        self.addon_gap = options.addon_gap;
        self.check_digit = options.check_digit;
        self.composite = options.composite;
        self
    }

    pub fn metadata(&self) -> String {
        match self.addon_gap {
            Some(g) => format!(
                "{{ Symbology: {:?}, Add-on gap: {}, Check digit: {}, Composite: {} }}",
                self.symbology, g, self.check_digit, self.composite
            ),
            None => format!(
                "{{ Symbology: {:?}, Add-on gap: None, Check digit: {}, Composite: {} }}",
                self.symbology, self.check_digit, self.composite
            ),
        }
    }
}


impl EanBuilder<'_> {
    pub fn build(&self) -> EanResult<Symbol> {
        debug!("Generating symbol {}...", self.metadata());
        let sym = self.resolve_symbology()?;

        debug!("Normalizing input...");
        let input = normalize(self.data, sym)?;

        debug!("Drawing primary symbol...");
        let mut linear = draw_primary(input.primary(), sym)?;

        if input.with_addon() {
            let gap = sym.addon_gap(self.addon_gap);
            debug!(addon = input.addon(), gap, "Drawing add-on...");
            append_addon(&mut linear, input.addon(), gap)?;
        }

        let symbol = Symbol::new(sym, linear.pattern, linear.text, linear.class);
        info!("Symbol generated {}", symbol.metadata());

        Ok(symbol)
    }

    /// Applies the check digit and composite flags to the requested variant.
    pub(crate) fn resolve_symbology(&self) -> EanResult<Symbology> {
        let mut sym = self.symbology;
        if self.check_digit {
            sym = sym.with_check_digit()?;
        }
        if self.composite {
            sym = sym.with_composite()?;
        }
        Ok(sym)
    }
}

/// Encodes `data` in one call, equivalent to configuring an [`EanBuilder`].
pub fn encode(data: &[u8], symbology: Symbology, options: &EncodeOptions) -> EanResult<Symbol> {
    EanBuilder::new(data).symbology(symbology).options(options).build()
}
