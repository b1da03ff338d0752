//! Menu-driven calculator (companion binary).
//!
//! A plain line-oriented REPL over [`tui_stacker::calc::Calculator`]. No
//! raw mode or alternate screen; it reads stdin and prints to stdout, so it
//! works the same interactively and under piped input.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use tui_stacker::calc::Calculator;

const MENU: &str = "\nOperations:
1. Addition (+)
2. Subtraction (-)
3. Multiplication (*)
4. Division (/)
5. Modulus (%)
6. Power (^)
7. Square Root (√)
8. Factorial (!)
9. Sine (sin)
10. Cosine (cos)
11. Tangent (tan)
12. Logarithm (log)
13. Memory Add (M+)
14. Memory Recall (MR)
15. Clear Memory (MC)
16. Show History
17. Exit
";

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut calc = Calculator::new();

    println!();
    println!("{}", "#".repeat(50));
    println!("#{}#", " ".repeat(48));
    println!("#{:^48}#", "ADVANCED CALCULATOR");
    println!("#{}#", " ".repeat(48));
    println!("{}", "#".repeat(50));

    loop {
        println!("{}", MENU);
        let Some(choice) = read_line(&mut lines, "Enter your choice (1-17): ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                if let Some((a, b)) = read_pair(&mut lines, "first number", "second number")? {
                    println!("Result: {}", calc.add(a, b));
                }
            }
            "2" => {
                if let Some((a, b)) = read_pair(&mut lines, "first number", "second number")? {
                    println!("Result: {}", calc.subtract(a, b));
                }
            }
            "3" => {
                if let Some((a, b)) = read_pair(&mut lines, "first number", "second number")? {
                    println!("Result: {}", calc.multiply(a, b));
                }
            }
            "4" => {
                if let Some((a, b)) = read_pair(&mut lines, "dividend", "divisor")? {
                    match calc.divide(a, b) {
                        Ok(result) => println!("Result: {}", result),
                        Err(e) => println!("Error: {}", e),
                    }
                }
            }
            "5" => {
                if let Some((a, b)) = read_pair(&mut lines, "first number", "second number")? {
                    match calc.modulus(a, b) {
                        Ok(result) => println!("Result: {}", result),
                        Err(e) => println!("Error: {}", e),
                    }
                }
            }
            "6" => {
                if let Some((base, exp)) = read_pair(&mut lines, "base", "exponent")? {
                    println!("Result: {}", calc.power(base, exp));
                }
            }
            "7" => {
                if let Some(n) = read_f64(&mut lines, "Enter number: ")? {
                    match calc.square_root(n) {
                        Ok(result) => println!("Result: {}", result),
                        Err(e) => println!("Error: {}", e),
                    }
                }
            }
            "8" => {
                if let Some(n) = read_i64(&mut lines, "Enter number: ")? {
                    match calc.factorial(n) {
                        Ok(result) => println!("Result: {}", result),
                        Err(e) => println!("Error: {}", e),
                    }
                }
            }
            "9" => {
                if let Some(angle) = read_f64(&mut lines, "Enter angle in degrees: ")? {
                    println!("Result: {:.6}", calc.sin(angle));
                }
            }
            "10" => {
                if let Some(angle) = read_f64(&mut lines, "Enter angle in degrees: ")? {
                    println!("Result: {:.6}", calc.cos(angle));
                }
            }
            "11" => {
                if let Some(angle) = read_f64(&mut lines, "Enter angle in degrees: ")? {
                    println!("Result: {:.6}", calc.tan(angle));
                }
            }
            "12" => {
                if let Some(n) = read_f64(&mut lines, "Enter number: ")? {
                    if let Some(base) = read_log_base(&mut lines)? {
                        match calc.log(n, base) {
                            Ok(result) => println!("Result: {:.6}", result),
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                }
            }
            "13" => {
                if let Some(value) = read_f64(&mut lines, "Enter value to add to memory: ")? {
                    println!("Memory: {}", calc.memory_add(value));
                }
            }
            "14" => {
                println!("Memory Value: {}", calc.memory_recall());
            }
            "15" => {
                calc.memory_clear();
                println!("Memory cleared!");
            }
            "16" => {
                print_history(&calc);
            }
            "17" => {
                println!("\nThank you for using the calculator!");
                print_history(&calc);
                break;
            }
            _ => {
                println!("Invalid choice! Please enter a number between 1 and 17.");
            }
        }
    }

    Ok(())
}

fn print_history(calc: &Calculator) {
    if calc.history().is_empty() {
        println!("No calculation history available.");
        return;
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("CALCULATION HISTORY");
    println!("{}", "=".repeat(50));
    for (i, entry) in calc.history().iter().enumerate() {
        println!("{:2}. {}", i + 1, entry);
    }
    println!("{}", "=".repeat(50));
    println!();
}

/// Prompt and read one line. `None` means stdin is closed.
fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Read one number; a parse failure reports an error and yields `None`.
fn read_f64(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<f64>> {
    let Some(line) = read_line(lines, prompt)? else {
        return Ok(None);
    };
    match line.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("Error: invalid number input!");
            Ok(None)
        }
    }
}

fn read_i64(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> Result<Option<i64>> {
    let Some(line) = read_line(lines, prompt)? else {
        return Ok(None);
    };
    match line.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("Error: invalid number input!");
            Ok(None)
        }
    }
}

/// Both operands for a two-number operation, prompted in order.
fn read_pair(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    first: &str,
    second: &str,
) -> Result<Option<(f64, f64)>> {
    let Some(a) = read_f64(lines, &format!("Enter {}: ", first))? else {
        return Ok(None);
    };
    let Some(b) = read_f64(lines, &format!("Enter {}: ", second))? else {
        return Ok(None);
    };
    Ok(Some((a, b)))
}

/// Logarithm base; an empty line means the default base 10.
fn read_log_base(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<f64>> {
    let Some(line) = read_line(lines, "Enter base (default 10): ")? else {
        return Ok(None);
    };
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Some(10.0));
    }
    match trimmed.parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            println!("Error: invalid number input!");
            Ok(None)
        }
    }
}
