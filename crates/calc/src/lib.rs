//! Calculator module - basic and scientific operations with history
//!
//! A menu-driven calculator backend. Every successful calculation is
//! appended to a textual history; operations that fail validation return
//! a [`CalcError`] and leave the history untouched.
//!
//! # Operations
//!
//! - **Basic**: add, subtract, multiply, divide, modulus, power
//! - **Scientific**: square root, factorial, sin/cos/tan (degrees),
//!   logarithm with arbitrary base
//! - **Memory**: add, subtract, recall, clear (never recorded in history)
//!
//! # Example
//!
//! ```
//! use tui_stacker_calc::Calculator;
//!
//! let mut calc = Calculator::new();
//! assert_eq!(calc.add(2.0, 3.0), 5.0);
//! assert!(calc.divide(1.0, 0.0).is_err());
//! assert_eq!(calc.history(), &["2 + 3 = 5".to_string()]);
//! ```

use thiserror::Error;

/// Validation failures for fallible operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Cannot divide by zero!")]
    DivideByZero,
    #[error("Cannot calculate square root of negative number!")]
    NegativeSquareRoot,
    #[error("Factorial not defined for negative numbers!")]
    NegativeFactorial,
    #[error("{0}! is too large to compute!")]
    FactorialOverflow(i64),
    #[error("Logarithm undefined for non-positive numbers!")]
    NonPositiveLog,
    #[error("Logarithm base must be positive and not 1!")]
    InvalidLogBase,
}

/// Calculator with history and a single memory register.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    history: Vec<String>,
    memory: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    // Basic operations

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        let result = a + b;
        self.history.push(format!("{} + {} = {}", a, b, result));
        result
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        let result = a - b;
        self.history.push(format!("{} - {} = {}", a, b, result));
        result
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        let result = a * b;
        self.history.push(format!("{} * {} = {}", a, b, result));
        result
    }

    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        if b == 0.0 {
            return Err(CalcError::DivideByZero);
        }
        let result = a / b;
        self.history.push(format!("{} / {} = {}", a, b, result));
        Ok(result)
    }

    /// Remainder of division. The result takes the divisor's sign.
    pub fn modulus(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        if b == 0.0 {
            return Err(CalcError::DivideByZero);
        }
        let result = a - b * (a / b).floor();
        self.history.push(format!("{} % {} = {}", a, b, result));
        Ok(result)
    }

    pub fn power(&mut self, base: f64, exponent: f64) -> f64 {
        let result = base.powf(exponent);
        self.history
            .push(format!("{} ^ {} = {}", base, exponent, result));
        result
    }

    // Scientific operations

    pub fn square_root(&mut self, n: f64) -> Result<f64, CalcError> {
        if n < 0.0 {
            return Err(CalcError::NegativeSquareRoot);
        }
        let result = n.sqrt();
        self.history.push(format!("√{} = {}", n, result));
        Ok(result)
    }

    /// Exact factorial. Values above 34 overflow the u128 result.
    pub fn factorial(&mut self, n: i64) -> Result<u128, CalcError> {
        if n < 0 {
            return Err(CalcError::NegativeFactorial);
        }
        let mut result: u128 = 1;
        for k in 2..=n as u128 {
            result = result
                .checked_mul(k)
                .ok_or(CalcError::FactorialOverflow(n))?;
        }
        self.history.push(format!("{}! = {}", n, result));
        Ok(result)
    }

    /// Sine of an angle given in degrees.
    pub fn sin(&mut self, angle_deg: f64) -> f64 {
        let result = angle_deg.to_radians().sin();
        self.history.push(format!("sin({}°) = {}", angle_deg, result));
        result
    }

    /// Cosine of an angle given in degrees.
    pub fn cos(&mut self, angle_deg: f64) -> f64 {
        let result = angle_deg.to_radians().cos();
        self.history.push(format!("cos({}°) = {}", angle_deg, result));
        result
    }

    /// Tangent of an angle given in degrees.
    pub fn tan(&mut self, angle_deg: f64) -> f64 {
        let result = angle_deg.to_radians().tan();
        self.history.push(format!("tan({}°) = {}", angle_deg, result));
        result
    }

    /// Logarithm of `n` in the given base.
    pub fn log(&mut self, n: f64, base: f64) -> Result<f64, CalcError> {
        if n <= 0.0 {
            return Err(CalcError::NonPositiveLog);
        }
        if base <= 0.0 || base == 1.0 {
            return Err(CalcError::InvalidLogBase);
        }
        let result = n.ln() / base.ln();
        self.history.push(format!("log{}({}) = {}", base, n, result));
        Ok(result)
    }

    // Memory operations (never recorded in history)

    pub fn memory_add(&mut self, value: f64) -> f64 {
        self.memory += value;
        self.memory
    }

    pub fn memory_subtract(&mut self, value: f64) -> f64 {
        self.memory -= value;
        self.memory
    }

    pub fn memory_recall(&self) -> f64 {
        self.memory
    }

    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    // History operations

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
