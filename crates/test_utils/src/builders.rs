//! Fluent Test Data Construction
//!
//! Builders with workable defaults, so a test spells out only the fields
//! it actually cares about.

use fake::faker::name::en::FirstName;
use fake::Fake;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money, ParticipantId, UserId};
use domain_event::{Event, EventOwner, Participant};
use domain_settlement::{BalanceSheet, ParticipantBalance};

use crate::fixtures::{KnownIds, NameFixtures};

/// Builder for constructing populated events
///
/// Expenses reference payers by roster index because participant ids are
/// only assigned at build time.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventBuilder::new()
///     .with_participants(&["Ann", "Bea", "Cat"])
///     .with_expense(0, dec!(90.00))
///     .build();
/// ```
pub struct EventBuilder {
    name: String,
    currency: Currency,
    owner: EventOwner,
    participant_names: Vec<String>,
    expenses: Vec<(usize, Decimal, Option<String>)>,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBuilder {
    /// Starts from an empty USD event owned by a known user
    pub fn new() -> Self {
        Self {
            name: NameFixtures::event_name().to_string(),
            currency: Currency::USD,
            owner: EventOwner::User(KnownIds::user()),
            participant_names: Vec::new(),
            expenses: Vec::new(),
        }
    }

    /// Sets the event name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the event currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets a registered owner
    pub fn with_user_owner(mut self, user_id: UserId) -> Self {
        self.owner = EventOwner::User(user_id);
        self
    }

    /// Sets an anonymous session owner
    pub fn with_session_owner(mut self) -> Self {
        self.owner = EventOwner::Session(KnownIds::session_key());
        self
    }

    /// Attaches one named participant
    pub fn with_participant(mut self, name: impl Into<String>) -> Self {
        self.participant_names.push(name.into());
        self
    }

    /// Attaches several named participants in order
    pub fn with_participants(mut self, names: &[&str]) -> Self {
        self.participant_names
            .extend(names.iter().map(|name| name.to_string()));
        self
    }

    /// Attaches `count` participants with generated names
    pub fn with_participant_count(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.participant_names.push(FirstName().fake());
        }
        self
    }

    /// Records an expense paid by the participant at `payer_index`
    pub fn with_expense(mut self, payer_index: usize, amount: Decimal) -> Self {
        self.expenses.push((payer_index, amount, None));
        self
    }

    /// Records a named expense paid by the participant at `payer_index`
    pub fn with_named_expense(
        mut self,
        payer_index: usize,
        name: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        self.expenses.push((payer_index, amount, Some(name.into())));
        self
    }

    /// Builds the event
    ///
    /// # Panics
    ///
    /// Panics when the builder data violates aggregate rules, for example
    /// an expense referencing a payer index outside the roster.
    pub fn build(self) -> Event {
        let mut event =
            Event::new(self.name, self.currency, self.owner).expect("builder event name is valid");

        let mut ids: Vec<ParticipantId> = Vec::with_capacity(self.participant_names.len());
        for name in &self.participant_names {
            let participant =
                Participant::new(name.clone(), None).expect("builder participant name is valid");
            ids.push(participant.id());
            event
                .add_participant(participant)
                .expect("builder participants are distinct");
        }

        for (payer_index, amount, name) in self.expenses {
            let payer = ids
                .get(payer_index)
                .copied()
                .expect("expense payer index is within the roster");
            let name = name.unwrap_or_else(|| NameFixtures::expense_name().to_string());
            event
                .record_expense(name, payer, Money::new(amount, self.currency))
                .expect("builder expense is valid");
        }

        event
    }
}

/// Builder for constructing balance sheets directly
///
/// Bypasses the event aggregate so tests can assemble arbitrary snapshots,
/// including inconsistent ones for residue handling.
pub struct BalanceSheetBuilder {
    currency: Currency,
    entries: Vec<ParticipantBalance>,
    total_override: Option<Decimal>,
    expense_count_override: Option<usize>,
}

impl Default for BalanceSheetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceSheetBuilder {
    /// Starts from an empty USD sheet with no rows
    pub fn new() -> Self {
        Self {
            currency: Currency::USD,
            entries: Vec::new(),
            total_override: None,
            expense_count_override: None,
        }
    }

    /// Sets the sheet currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Adds a participant row with a fresh id
    pub fn with_paid(mut self, name: impl Into<String>, paid: Decimal) -> Self {
        self.entries.push(ParticipantBalance::new(
            ParticipantId::new(),
            name,
            Money::new(paid, self.currency),
        ));
        self
    }

    /// Adds a participant row with a caller-supplied id
    pub fn with_entry(
        mut self,
        participant_id: ParticipantId,
        name: impl Into<String>,
        paid: Decimal,
    ) -> Self {
        self.entries.push(ParticipantBalance::new(
            participant_id,
            name,
            Money::new(paid, self.currency),
        ));
        self
    }

    /// Overrides the total, allowing sheets whose rows do not sum exactly
    pub fn with_total(mut self, total: Decimal) -> Self {
        self.total_override = Some(total);
        self
    }

    /// Overrides the expense-record count
    pub fn with_expense_count(mut self, count: usize) -> Self {
        self.expense_count_override = Some(count);
        self
    }

    /// Builds the balance sheet
    ///
    /// The total defaults to the sum of the rows; the expense count
    /// defaults to the number of rows with a positive paid amount.
    ///
    /// # Panics
    ///
    /// Panics when the rows disagree with the sheet currency.
    pub fn build(self) -> BalanceSheet {
        let total = self.total_override.unwrap_or_else(|| {
            self.entries
                .iter()
                .map(|entry| entry.paid().amount())
                .sum()
        });
        let expense_count = self.expense_count_override.unwrap_or_else(|| {
            self.entries
                .iter()
                .filter(|entry| entry.paid().is_positive())
                .count()
        });

        BalanceSheet::new(
            self.currency,
            self.entries,
            Money::new(total, self.currency),
            expense_count,
        )
        .expect("builder rows share the sheet currency")
    }
}
