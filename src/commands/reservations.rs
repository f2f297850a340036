use tracing::info;

use super::{clean_orders, new_id, require_date, require_text, require_time};
use crate::error::{AppError, AppResult};
use crate::models::{CreateReservation, Reservation, ReservationStatus};
use crate::store::Store;

pub fn get_reservations(store: &Store) -> &[Reservation] {
    store.reservations()
}

pub fn create_reservation(store: &mut Store, reservation: CreateReservation) -> AppResult<Reservation> {
    let reservation = Reservation {
        id: new_id(),
        customer_name: reservation.customer_name.trim().to_string(),
        pax: reservation.pax,
        date: reservation.date,
        time: reservation.time,
        status: reservation.status.unwrap_or(ReservationStatus::Confirmed),
        notes: reservation.notes.filter(|n| !n.trim().is_empty()),
        orders: clean_orders(reservation.orders),
    };
    validate(&reservation)?;

    store.reservations.push(reservation.clone());
    store.save_reservations()?;

    info!(
        id = %reservation.id,
        date = %reservation.date,
        pax = reservation.pax,
        pre_ordered = !reservation.orders.is_empty(),
        "Created reservation"
    );
    Ok(reservation)
}

pub fn update_reservation(store: &mut Store, reservation: Reservation) -> AppResult<Reservation> {
    let reservation = Reservation {
        orders: clean_orders(reservation.orders),
        ..reservation
    };
    validate(&reservation)?;

    let slot = store
        .reservations
        .iter_mut()
        .find(|r| r.id == reservation.id)
        .ok_or_else(|| AppError::not_found("Reservation", &reservation.id))?;
    *slot = reservation.clone();
    store.save_reservations()?;

    info!(id = %reservation.id, "Updated reservation");
    Ok(reservation)
}

/// Any status may follow any other.
pub fn set_reservation_status(
    store: &mut Store,
    id: &str,
    status: ReservationStatus,
) -> AppResult<Reservation> {
    let reservation = store
        .reservations
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::not_found("Reservation", id))?;
    reservation.status = status;
    let updated = reservation.clone();
    store.save_reservations()?;

    info!(id, ?status, "Changed reservation status");
    Ok(updated)
}

pub fn delete_reservation(store: &mut Store, id: &str) -> AppResult<()> {
    let before = store.reservations.len();
    store.reservations.retain(|r| r.id != id);
    if store.reservations.len() == before {
        return Err(AppError::not_found("Reservation", id));
    }
    store.save_reservations()?;

    info!(id, "Deleted reservation");
    Ok(())
}

fn validate(reservation: &Reservation) -> AppResult<()> {
    require_text("Customer name", &reservation.customer_name)?;
    if reservation.pax == 0 {
        return Err(AppError::validation("Party size must be at least 1"));
    }
    require_date(&reservation.date)?;
    require_time(&reservation.time)
}
