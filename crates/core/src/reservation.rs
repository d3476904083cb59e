//! Guards for the reservation state transitions.
//!
//! A slot moves available -> unavailable when reserved and back when the
//! reservation is cancelled. `Slot.available` is the authoritative flag;
//! reservation status only records the claim's own lifecycle.

use uuid::Uuid;

use crate::errors::{TutorError, TutorResult};
use crate::models::reservation::Reservation;
use crate::models::slot::Slot;

/// Checks that `slot` can be reserved by a student with the given prior
/// reservation history for this slot.
///
/// Any prior reservation for the same (student, slot) pair blocks a new
/// one, including a cancelled reservation. A student who cancels gives
/// the slot up for good.
pub fn ensure_reservable(slot: &Slot, prior: Option<&Reservation>) -> TutorResult<()> {
    if !slot.available {
        return Err(TutorError::SlotUnavailable(slot.id.to_string()));
    }

    if let Some(existing) = prior {
        return Err(TutorError::DuplicateReservation(format!(
            "Student already has a reservation ({}) for slot {}",
            existing.id, slot.id
        )));
    }

    Ok(())
}

/// Checks that `reservation` may be cancelled by `student_id`.
pub fn ensure_cancellable(reservation: &Reservation, student_id: Uuid) -> TutorResult<()> {
    if reservation.student_id != student_id {
        return Err(TutorError::NotOwner(format!(
            "Reservation {} does not belong to this student",
            reservation.id
        )));
    }

    Ok(())
}
