//! Builtin operator catalogue.
//!
//! Arithmetic operators work on floats. Text operators read and produce the
//! strings tutors type into widgets, including the shallow expression
//! parsing used for linear-equation tasks.

use crate::observability::{log_event_with_fields, Event};
use crate::schema::FieldValue;

use super::errors::OperatorResult;
use super::fault::Fault;
use super::operator::Operator;
use super::text;
use super::value::{number_arg, text_arg, widget_arg, Value};

fn add(args: &[Value]) -> Result<Value, Fault> {
    Ok(Value::Number(number_arg(args, 0)? + number_arg(args, 1)?))
}

fn add_one(args: &[Value]) -> Result<Value, Fault> {
    Ok(Value::Number(number_arg(args, 0)? + 1.0))
}

fn subtract(args: &[Value]) -> Result<Value, Fault> {
    Ok(Value::Number(number_arg(args, 0)? - number_arg(args, 1)?))
}

fn multiply(args: &[Value]) -> Result<Value, Fault> {
    Ok(Value::Number(number_arg(args, 0)? * number_arg(args, 1)?))
}

fn nonzero_divisor(args: &[Value]) -> Result<bool, Fault> {
    Ok(number_arg(args, 1)? != 0.0)
}

fn divide(args: &[Value]) -> Result<Value, Fault> {
    let divisor = number_arg(args, 1)?;
    if divisor == 0.0 {
        return Err(Fault::DivisionByZero);
    }
    Ok(Value::Number(number_arg(args, 0)? / divisor))
}

fn equals(args: &[Value]) -> Result<Value, Fault> {
    let same = number_arg(args, 0)? == number_arg(args, 1)?;
    Ok(Value::Number(if same { 1.0 } else { 0.0 }))
}

fn add3(args: &[Value]) -> Result<Value, Fault> {
    Ok(Value::Number(
        number_arg(args, 0)? + number_arg(args, 1)? + number_arg(args, 2)?,
    ))
}

fn mod10(args: &[Value]) -> Result<Value, Fault> {
    Ok(Value::Number(crate::numeric::floor_mod(number_arg(args, 0)?, 10.0)))
}

fn div10(args: &[Value]) -> Result<Value, Fault> {
    Ok(Value::Number(crate::numeric::floor_div(number_arg(args, 0)?, 10.0)))
}

fn str_to_float(args: &[Value]) -> Result<Value, Fault> {
    text::parse_float(text_arg(args, 0)?).map(Value::Number)
}

fn reverse_sign(args: &[Value]) -> Result<Value, Fault> {
    Ok(Value::Number(-number_arg(args, 0)?))
}

fn var_name(args: &[Value]) -> Result<Value, Fault> {
    text::var_name(text_arg(args, 0)?).map(Value::from)
}

fn float_to_str(args: &[Value]) -> Result<Value, Fault> {
    text::render_float(number_arg(args, 0)?).map(Value::Text)
}

fn rip_str_value(args: &[Value]) -> Result<Value, Fault> {
    match widget_arg(args, 0)?.get("value") {
        Some(FieldValue::Text(s)) => Ok(Value::Text(s.clone())),
        Some(FieldValue::Number(n)) => Ok(Value::Text(format!("{:?}", n))),
        None => Err(Fault::NoMatch),
    }
}

fn skill_subtract(args: &[Value]) -> Result<Value, Fault> {
    let amount = text::render_float(number_arg(args, 0)?)?;
    Ok(Value::Text(format!("subtract {}", amount)))
}

fn skill_divide(args: &[Value]) -> Result<Value, Fault> {
    let amount = text::render_float(number_arg(args, 0)?)?;
    Ok(Value::Text(format!("divide {}", amount)))
}

fn mentions_x(args: &[Value]) -> Result<bool, Fault> {
    Ok(text::contains_x(text_arg(args, 0)?))
}

fn get_coefficient(args: &[Value]) -> Result<Value, Fault> {
    text::coefficient(text_arg(args, 0)?).map(Value::from)
}

fn get_bias(args: &[Value]) -> Result<Value, Fault> {
    let term = text::bias(text_arg(args, 0)?)?;
    log_event_with_fields(Event::BiasExtracted, &[("term", term)]);
    Ok(Value::from(term))
}

/// Every builtin operator, in catalogue order
pub fn operators() -> OperatorResult<Vec<Operator>> {
    use Fault::{InvalidNumber, NoMatch};

    Ok(vec![
        Operator::new("Add", "float(float,float)", add)?.commutative(),
        Operator::new("AddOne", "float(float)", add_one)?.commutative(),
        Operator::new("Subtract", "float(float,float)", subtract)?,
        Operator::new("Multiply", "float(float,float)", multiply)?.commutative(),
        Operator::new("Divide", "float(float,float)", divide)?.with_condition(nonzero_divisor),
        Operator::new("Equals", "float(float,float)", equals)?,
        Operator::new("Add3", "float(float,float,float)", add3)?.commutative(),
        Operator::new("Mod10", "float(float)", mod10)?.commutative(),
        Operator::new("Div10", "float(float)", div10)?.commutative(),
        Operator::new("StrToFloat", "float(string)", str_to_float)?.muting(&[InvalidNumber]),
        Operator::new("ReverseSign", "float(float)", reverse_sign)?
            .with_template("ReverseSign(float)")
            .muting(&[InvalidNumber]),
        Operator::new("VarName", "str(str)", var_name)?
            .with_template("VarName({})")
            .muting(&[InvalidNumber]),
        Operator::new("FloatToStr", "string(float)", float_to_str)?
            .with_template("FloatToStr({})")
            .muting(&[InvalidNumber]),
        Operator::new("RipStrValue", "string(TextField)", rip_str_value)?
            .with_template("RipStrValue({})")
            .muting(&[InvalidNumber]),
        Operator::new("SkillSubtract", "str(float)", skill_subtract)?
            .with_template("SkillSubtract({})")
            .muting(&[InvalidNumber]),
        Operator::new("SkillDivide", "str(float)", skill_divide)?
            .with_template("SkillDivide({})")
            .muting(&[InvalidNumber]),
        Operator::new("GetCoefficient", "str(str)", get_coefficient)?
            .with_condition(mentions_x)
            .with_template("GetCoefficient({})")
            .muting(&[InvalidNumber]),
        Operator::new("GetBias", "str(str)", get_bias)?
            .with_condition(mentions_x)
            .with_template("GetBias({})")
            .muting(&[InvalidNumber, NoMatch]),
    ])
}
