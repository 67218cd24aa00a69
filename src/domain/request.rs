use crate::domain::validation::ValidationError;
use crate::domain::value::{Encoding, Msisdn, OriginatorType, TtlMinutes};

/// Optional settings of an outbound SMS.
///
/// Unset fields are left out of the request so the account defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    pub originator_type: Option<OriginatorType>,
    pub encoding: Option<Encoding>,
    pub time_to_live: Option<TtlMinutes>,
}

/// An SMS to send to one or more recipients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    body: String,
    originator: String,
    numbers: Vec<Msisdn>,
    options: MessageOptions,
}

impl Message {
    /// Build a message with default options.
    ///
    /// Fails on the first number containing `,`.
    pub fn new<I, N>(
        body: impl Into<String>,
        originator: impl Into<String>,
        numbers: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::with_options(body, originator, numbers, MessageOptions::default())
    }

    /// Build a message with explicit options.
    pub fn with_options<I, N>(
        body: impl Into<String>,
        originator: impl Into<String>,
        numbers: I,
        options: MessageOptions,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let numbers = numbers
            .into_iter()
            .map(Msisdn::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            body: body.into(),
            originator: originator.into(),
            numbers,
            options,
        })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn originator(&self) -> &str {
        &self.originator
    }

    pub fn numbers(&self) -> &[Msisdn] {
        &self.numbers
    }

    pub fn options(&self) -> &MessageOptions {
        &self.options
    }
}

/// Request to register an inbound keyword on a shortcode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateKeyword {
    shortcode: String,
    keyword: String,
    is_sticky: bool,
    mo_url: Option<String>,
}

impl CreateKeyword {
    pub fn new(shortcode: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            shortcode: shortcode.into(),
            keyword: keyword.into(),
            is_sticky: false,
            mo_url: None,
        }
    }

    /// Mark the keyword as sticky.
    pub fn with_sticky(mut self, is_sticky: bool) -> Self {
        self.is_sticky = is_sticky;
        self
    }

    /// URL that receives mobile-originated messages for this keyword.
    ///
    /// An empty URL is treated as unset.
    pub fn with_mo_url(mut self, mo_url: impl Into<String>) -> Self {
        let mo_url = mo_url.into();
        self.mo_url = (!mo_url.is_empty()).then_some(mo_url);
        self
    }

    pub fn shortcode(&self) -> &str {
        &self.shortcode
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn is_sticky(&self) -> bool {
        self.is_sticky
    }

    pub fn mo_url(&self) -> Option<&str> {
        self.mo_url.as_deref()
    }
}
