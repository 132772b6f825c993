//! Event aggregate root
//!
//! The Event aggregate is the consistency boundary for shared-expense
//! tracking: it owns the participant roster and the expense records, and it
//! is the only place balance sheets are produced from.
//!
//! # Invariants
//!
//! - Every expense payer is a participant attached to the same event
//! - A participant is attached at most once, keyed by id
//! - A participant with recorded expenses cannot be detached
//! - All expense amounts carry the event currency
//! - The currency is locked once the first expense is recorded

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, EventId, ExpenseId, Money, ParticipantId, SessionKey, UserId};
use domain_settlement::{BalanceSheet, ParticipantBalance};

use crate::error::{EventError, EventResult};
use crate::expense::Expense;
use crate::participant::Participant;
use crate::validation::validate_name;

/// Who an event belongs to
///
/// The product supports both registered accounts and anonymous browser
/// sessions; every event has exactly one of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventOwner {
    /// A registered user account
    User(UserId),
    /// An anonymous browser session
    Session(SessionKey),
}

impl EventOwner {
    /// Checks whether the owner is a registered user
    pub fn is_registered(&self) -> bool {
        matches!(self, EventOwner::User(_))
    }

    /// Checks whether the owner is an anonymous session
    pub fn is_anonymous(&self) -> bool {
        matches!(self, EventOwner::Session(_))
    }
}

/// The Event aggregate root
///
/// Holds the roster and expense history for one shared-expense grouping
/// (a trip, a dinner, a household month) and derives the balance sheet the
/// settlement calculator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    name: String,
    currency: Currency,
    owner: EventOwner,
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
    created_at: DateTime<Utc>,
}

impl Event {
    /// Maximum event name length in characters
    pub const MAX_NAME_LENGTH: usize = 100;

    /// Creates an event with an empty roster and no expenses
    ///
    /// # Errors
    ///
    /// Returns an error when the name is empty or longer than
    /// [`Self::MAX_NAME_LENGTH`] characters.
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        owner: EventOwner,
    ) -> EventResult<Self> {
        let name = name.into();
        validate_name("event", &name, Self::MAX_NAME_LENGTH)?;

        Ok(Self {
            id: EventId::new(),
            name,
            currency,
            owner,
            participants: Vec::new(),
            expenses: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Returns the event identifier
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Returns the event name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the event currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the owner
    pub fn owner(&self) -> &EventOwner {
        &self.owner
    }

    /// Returns when the event was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the roster in attachment order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Returns the roster size
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Looks up an attached participant
    pub fn participant(&self, participant_id: ParticipantId) -> Option<&Participant> {
        self.participants
            .iter()
            .find(|participant| participant.id() == participant_id)
    }

    /// Checks whether a participant is attached
    pub fn is_participant(&self, participant_id: ParticipantId) -> bool {
        self.participant(participant_id).is_some()
    }

    /// Attaches a participant to the event
    ///
    /// # Errors
    ///
    /// Returns [`EventError::DuplicateParticipant`] when a participant with
    /// the same id is already attached. Shared display names are allowed;
    /// only the id carries identity.
    pub fn add_participant(&mut self, participant: Participant) -> EventResult<()> {
        if self.is_participant(participant.id()) {
            return Err(EventError::DuplicateParticipant {
                participant: participant.id(),
            });
        }

        tracing::debug!(
            event = %self.id,
            participant = %participant.id(),
            name = participant.name(),
            "participant attached"
        );
        self.participants.push(participant);
        Ok(())
    }

    /// Detaches a participant from the event
    ///
    /// # Errors
    ///
    /// Returns [`EventError::ParticipantNotFound`] when the participant is
    /// not attached, and [`EventError::ParticipantHasExpenses`] when they
    /// are the payer of recorded expenses. Detaching a payer would drop
    /// their payments from the balance sheet and break its zero-sum
    /// property, so the expenses must be removed first.
    pub fn remove_participant(&mut self, participant_id: ParticipantId) -> EventResult<Participant> {
        let index = self
            .participants
            .iter()
            .position(|participant| participant.id() == participant_id)
            .ok_or(EventError::ParticipantNotFound {
                participant: participant_id,
            })?;

        let expense_count = self.expense_count_for(participant_id);
        if expense_count > 0 {
            return Err(EventError::ParticipantHasExpenses {
                participant: participant_id,
                expense_count,
            });
        }

        Ok(self.participants.remove(index))
    }

    /// Keeps only the listed participants, detaching everyone else
    ///
    /// This is the roster-update semantic: callers submit the full set of
    /// participants that should remain attached. Order of `keep` is
    /// irrelevant; the roster keeps its attachment order.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::ParticipantHasExpenses`] if any participant to
    /// be detached is the payer of recorded expenses; the roster is left
    /// unchanged in that case.
    pub fn retain_participants(&mut self, keep: &[ParticipantId]) -> EventResult<()> {
        for participant in &self.participants {
            if keep.contains(&participant.id()) {
                continue;
            }
            let expense_count = self.expense_count_for(participant.id());
            if expense_count > 0 {
                return Err(EventError::ParticipantHasExpenses {
                    participant: participant.id(),
                    expense_count,
                });
            }
        }

        self.participants
            .retain(|participant| keep.contains(&participant.id()));
        Ok(())
    }

    /// Records an expense paid by an attached participant
    ///
    /// Returns the id of the new expense record.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::PayerNotParticipant`] when the payer is not
    /// attached to this event, [`EventError::CurrencyMismatch`] when the
    /// amount is not in the event currency, and the validation errors of
    /// [`Expense::new`] for a bad name or amount.
    pub fn record_expense(
        &mut self,
        name: impl Into<String>,
        payer: ParticipantId,
        amount: Money,
    ) -> EventResult<ExpenseId> {
        if !self.is_participant(payer) {
            return Err(EventError::PayerNotParticipant {
                payer,
                event: self.name.clone(),
            });
        }
        if amount.currency() != self.currency {
            return Err(EventError::CurrencyMismatch {
                expected: self.currency,
                found: amount.currency(),
            });
        }

        let expense = Expense::new(name, payer, amount)?;
        let expense_id = expense.id();

        tracing::debug!(
            event = %self.id,
            expense = %expense_id,
            payer = %payer,
            amount = %amount,
            "expense recorded"
        );
        self.expenses.push(expense);
        Ok(expense_id)
    }

    /// Removes an expense record
    ///
    /// # Errors
    ///
    /// Returns [`EventError::ExpenseNotFound`] when no expense with the
    /// given id is recorded on this event.
    pub fn remove_expense(&mut self, expense_id: ExpenseId) -> EventResult<Expense> {
        let index = self
            .expenses
            .iter()
            .position(|expense| expense.id() == expense_id)
            .ok_or(EventError::ExpenseNotFound {
                expense: expense_id,
            })?;

        Ok(self.expenses.remove(index))
    }

    /// Renames the event
    pub fn rename(&mut self, name: impl Into<String>) -> EventResult<()> {
        let name = name.into();
        validate_name("event", &name, Self::MAX_NAME_LENGTH)?;
        self.name = name;
        Ok(())
    }

    /// Changes the event currency
    ///
    /// # Errors
    ///
    /// Returns [`EventError::CurrencyLocked`] once any expense is recorded;
    /// recorded amounts carry the currency and cannot be re-denominated.
    pub fn change_currency(&mut self, currency: Currency) -> EventResult<()> {
        if !self.expenses.is_empty() {
            return Err(EventError::CurrencyLocked {
                expense_count: self.expenses.len(),
            });
        }
        self.currency = currency;
        Ok(())
    }

    /// Returns expense records, newest first
    pub fn expenses(&self) -> Vec<&Expense> {
        self.expenses.iter().rev().collect()
    }

    /// Returns the number of recorded expenses
    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Returns the sum of all recorded expense amounts
    pub fn total_expenses(&self) -> Money {
        self.expenses
            .iter()
            .fold(Money::zero(self.currency), |total, expense| {
                total + expense.amount()
            })
    }

    /// Returns the sum of amounts paid by one participant
    pub fn total_paid_by(&self, participant_id: ParticipantId) -> Money {
        self.expenses
            .iter()
            .filter(|expense| expense.payer() == participant_id)
            .fold(Money::zero(self.currency), |total, expense| {
                total + expense.amount()
            })
    }

    /// Builds the balance sheet for settlement
    ///
    /// One entry per attached participant in roster order; participants
    /// without expenses appear with a zero paid amount. Roster order is what
    /// the calculator's stable tie-break preserves.
    pub fn balance_sheet(&self) -> EventResult<BalanceSheet> {
        let entries = self
            .participants
            .iter()
            .map(|participant| {
                ParticipantBalance::new(
                    participant.id(),
                    participant.name(),
                    self.total_paid_by(participant.id()),
                )
            })
            .collect();

        Ok(BalanceSheet::new(
            self.currency,
            entries,
            self.total_expenses(),
            self.expenses.len(),
        )?)
    }

    fn expense_count_for(&self, participant_id: ParticipantId) -> usize {
        self.expenses
            .iter()
            .filter(|expense| expense.payer() == participant_id)
            .count()
    }
}
