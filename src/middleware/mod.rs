/*
 * Responsibility
 * - middleware public interface (re-export)
 * - transport concerns in http/cors, auth resolution in session
 */
pub mod cors;
pub mod http;
pub mod session;
