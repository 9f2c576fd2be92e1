//! No-op print surface for builds without the `enabled` feature
//!
//! Same signatures as the real entry points; every body is empty and
//! inlined away.

use bytemuck::NoUninit;
use structdump_shared::CompositeDescriptor;

use crate::config::PrintConfig;
use crate::registry::{Describe, DescriptorRegistry};
use crate::sink::Sink;

#[inline(always)]
pub fn print<S: Sink + ?Sized>(
    _name: Option<&str>,
    _base: Option<&[u8]>,
    _descriptor: Option<&CompositeDescriptor>,
    _sink: &mut S,
) {
}

#[inline(always)]
pub fn print_with_config<S: Sink + ?Sized>(
    _name: Option<&str>,
    _base: Option<&[u8]>,
    _descriptor: Option<&CompositeDescriptor>,
    _config: &PrintConfig,
    _sink: &mut S,
) {
}

#[inline(always)]
pub fn print_value<T: NoUninit, S: Sink + ?Sized>(
    _name: Option<&str>,
    _value: &T,
    _descriptor: &CompositeDescriptor,
    _sink: &mut S,
) {
}

#[inline(always)]
pub fn print_described<T: Describe + NoUninit, S: Sink + ?Sized>(
    _name: &str,
    _value: &T,
    _sink: &mut S,
) {
}

#[inline(always)]
pub fn print_registered<T: NoUninit + 'static, S: Sink + ?Sized>(
    _name: &str,
    _value: &T,
    _registry: &DescriptorRegistry,
    _sink: &mut S,
) {
}
