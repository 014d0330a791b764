// Letter building: assembly of the final text and its printable form.

pub mod assembler;
pub mod handlers;
pub mod printable;
