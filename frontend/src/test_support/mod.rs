#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fake_dom;
#[cfg(test)]
pub mod scheduler;
